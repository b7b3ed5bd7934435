use anyhow::Result;
use dedup_cleaner::args;

fn main() -> Result<()> {
    let args = args::parsed();

    println!("=== Duplicate Cleaner ===");
    println!("Входной файл:  {}", args.input.display());
    println!("Выходной файл: {}", args.output.display());

    dedup_cleaner::run(&args)
}
