/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Exchange Rates Example
//!
//! This example demonstrates how to use sie-client to:
//! - Load the API token from the environment (`BANXICO_TOKEN`, `.env` aware)
//! - Fetch the latest FIX and liquidation USD/MXN rates
//! - Fetch a date range and walk the resulting date map
//! - Tell the different failure kinds apart
//!
//! Run with `RUST_LOG=sie_client=debug` to see the request log.

use sie_client::{Config, Error, SeriesResult, SieClient};
use std::env;
use tracing_subscriber::EnvFilter;

fn print_result(label: &str, result: &SeriesResult) {
  match result {
    SeriesResult::Value(value) => println!("{}: {}", label, value),
    SeriesResult::Dates(dates) => {
      println!("{} ({} observations):", label, dates.len());
      for (date, value) in dates.iter() {
        println!("  {}  {}", date, value);
      }
    }
    SeriesResult::Series(series) => {
      for (id, dates) in series.iter() {
        println!("{} / {}:", label, id);
        for (date, value) in dates.iter() {
          println!("  {}  {}", date, value);
        }
      }
    }
  }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

  let config = Config::from_env().map_err(|e| {
    eprintln!("Failed to load configuration. Make sure BANXICO_TOKEN is set.");
    eprintln!("Error: {}", e);
    e
  })?;

  let client = SieClient::from_config(config)?;
  println!("Banxico SIE client using {}\n", client.base_uri());

  let fix = client.exchange_rate_determination(None, None).await?;
  print_result("FIX (latest)", &fix);

  let liquidation = client.exchange_rate_liquidation(None, None).await?;
  print_result("Liquidation (latest)", &liquidation);

  let start = env::args().nth(1).unwrap_or_else(|| "2020-11-23".to_string());
  let end = env::args().nth(2).unwrap_or_else(|| "2020-11-27".to_string());

  match client.exchange_rate_determination(Some(&start), Some(&end)).await {
    Ok(range) => print_result("FIX (range)", &range),
    Err(Error::RequestFailed { status }) => eprintln!("SIE answered with HTTP {}", status),
    Err(Error::TransportFailed { source }) => eprintln!("Could not reach SIE: {}", source),
    Err(e) => eprintln!("Unexpected response: {}", e),
  }

  Ok(())
}
