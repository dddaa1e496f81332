use hexcase::cli::{self, Command};
use hexcase::{init_logging, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => print!("{}", cli::USAGE),
        Command::Version => println!("hexcase {} (built {})", VERSION, BUILD_DATE),
        Command::Generate(options) => {
            let settings = cli::load_settings(&options)?;
            init_logging(cli::is_verbose(&options, &settings))?;
            cli::generate(&options, &settings)?;
        }
    }

    Ok(())
}
