use feederkit::{init_logging, Shell, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!(version = VERSION, build_date = BUILD_DATE, "Starting FeederKit");

    let mut shell = Shell::from_settings()?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell.run(stdin.lock(), &mut stdout)
}
