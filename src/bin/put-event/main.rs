#![deny(clippy::all, clippy::nursery)]
#![deny(nonstandard_style, rust_2018_idioms)]

use anyhow::Result;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use std::process;
use tracing::{error, info};

mod config;
mod event;
mod store;

use config::Config;
use event::Event;
use store::{Store, StoreBuilder};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let config = Config::from_env();

    let store = StoreBuilder::default()
        .table_name(config.table_name.clone())
        .client(config.client().await)
        .build()?;

    lambda_runtime::run(service_fn(|event: LambdaEvent<Event>| {
        function_handler(event, &store)
    }))
    .await
}

// Any failure takes the whole process down; the trigger decides whether to reinvoke.
async fn function_handler(event: LambdaEvent<Event>, store: &Store) -> Result<String, Error> {
    match handler(event.payload, store).await {
        Ok(id) => Ok(id),
        Err(e) => {
            error!("{:?}", e); // log error chain to CloudWatch
            process::exit(1);
        }
    }
}

async fn handler(event: Event, store: &Store) -> Result<String> {
    info!("{}", event.body);
    info!("{}", event.id);

    store.put_event(&event).await?;

    Ok(event.id)
}
