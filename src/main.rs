use fingerbox::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    fingerbox::cli::run_from_env()
}
