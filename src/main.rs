use azure_securitygroup_facts::args::Args;
use azure_securitygroup_facts::logging::init_logging;
use azure_securitygroup_facts::output::{print_envelope, print_failure};
use azure_securitygroup_facts::query_security_groups;
use clap::Parser;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging(&args.log_config, args.verbose)?;
    log::info!("#Start main()");

    match query_security_groups(&args).await {
        Ok(envelope) => print_envelope(&envelope, args.pretty)?,
        Err(e) => {
            log::error!("{e}");
            print_failure(&e, args.pretty)?;
            std::process::exit(1);
        }
    }

    Ok(())
}
