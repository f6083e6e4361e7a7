mod batch;
mod catalog;
mod queries;
mod report;
mod resolver;

use batch::{BatchPacing, BatchRunner};
use catalog::met::MetCatalogClient;
use log::{error, info};
use resolver::{Resolver, RetryPolicy};

fn main() {
    let mut clog = colog::default_builder();
    clog.filter(None, log::LevelFilter::Info);
    clog.init();

    let queries = queries::highlight_queries();
    info!(
        "Searching for Met Museum object IDs ({} titles)",
        queries.len()
    );

    let resolver = Resolver::new(MetCatalogClient::new(), RetryPolicy::default());
    let runner = BatchRunner::new(resolver, BatchPacing::default());
    let results = runner.run(&queries);

    info!(
        "Found {} / {} object IDs",
        report::resolved_count(&results),
        results.len()
    );

    println!("Object IDs (comma-separated):");
    println!("{}", report::comma_separated_ids(&results));

    println!("\nFull results as JSON:");
    match report::results_json(&results) {
        Ok(json) => println!("{json}"),
        Err(err) => error!("Failed to serialize results: {err}"),
    }
}
