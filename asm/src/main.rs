use arch::optab::{OpTable, STANDARD};
use color_print::cprintln;
use sicasm::{listing, Assembly, Error};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Source file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Object program
    #[clap(short, long, default_value = "main.obj")]
    output: String,

    /// Intermediate listing
    #[clap(short, long, default_value = "main.lst")]
    listing: String,

    /// Opcode definitions: `MNEMONIC HEX` lines, or YAML for .yaml / .yml
    #[clap(short = 't', long)]
    optab: Option<String>,

    /// Write the symbol table as YAML
    #[clap(short, long)]
    symbols: Option<String>,

    /// Dump symbol table, deferred operands and intermediate listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("SIC Assembler");
    if let Err(err) = run(&args) {
        cprintln!("<red,bold>error</>: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    println!("1. Read Source & Pass One");

    let optab = match &args.optab {
        Some(path) => {
            println!("  < {}", path);
            load_optab(path)?
        }
        None => STANDARD.clone(),
    };

    println!("  < {}", args.input);
    let source = std::fs::read_to_string(&args.input)
        .map_err(|e| Error::FileOpen(args.input.clone(), e))?;
    let lines = source.lines().collect::<Vec<_>>();

    let Assembly {
        pass1,
        msgs,
        pass1_msgs,
        object,
    } = sicasm::assemble(&source, &optab);
    msgs.dump_range(0..pass1_msgs, &args.input, &lines);

    println!("  > {}", args.listing);
    write(&args.listing, &listing::render(&pass1.entries))?;
    if let Some(path) = &args.symbols {
        println!("  > {}", path);
        write(path, &pass1.symtab.to_yaml()?)?;
    }

    listing::print_program(&pass1.program);
    if args.dump {
        listing::print_symbols(&pass1.symtab);
        listing::print_deferred(&pass1.deferred);
        listing::print_entries(&pass1.entries);
    }

    println!("2. Resolve Symbols & Pass Two");
    msgs.dump_range(pass1_msgs..msgs.len(), &args.input, &lines);
    let object = object?;

    println!("  > {}", args.output);
    write(&args.output, &object.to_string())?;
    if args.dump {
        print!("{}", object);
    }
    Ok(())
}

fn load_optab(path: &str) -> Result<OpTable, Error> {
    let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    let yaml = matches!(
        Path::new(path).extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    let table = if yaml {
        OpTable::from_yaml(file)
    } else {
        let text = std::io::read_to_string(file).map_err(Error::FileRead)?;
        OpTable::parse(&text)
    };
    table.map_err(|e| Error::Optab(path.to_string(), e))
}

fn write(path: &str, text: &str) -> Result<(), Error> {
    let mut file = File::create(path).map_err(|e| Error::FileWrite(path.to_string(), e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| Error::FileWrite(path.to_string(), e))
}
