/*
[INPUT]:  Dataset version and subset
[OUTPUT]: Subset listing and the first task's grid sizes
[POS]:    Examples - listing and content queries
[UPDATE]: When adding new listing/content endpoints
*/

use arc_task_adapter::*;

/// Example: list the ARC 2 training subset and fetch its first task
#[tokio::main]
async fn main() {
    println!("=== ARC Task Listing Example ===\n");

    let client = match ArcClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let version = DatasetVersion::Arc2;
    let subset = Subset::Training;

    println!("Listing {} {}...", version, subset);
    let entries = match client.list_tasks(version, subset).await {
        Ok(entries) => {
            println!("✓ {} tasks", entries.len());
            entries
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    let Some(first) = entries.first() else {
        println!("✗ Listing is empty");
        return;
    };

    println!("\nFetching {}...", first.name);
    match TaskSource::fetch_task(&client, first).await {
        Ok(task) => {
            for (i, pair) in task.test.iter().enumerate() {
                let (h, w) = pair.input.dimensions();
                println!("✓ test pair {}: {}x{} input", i, h, w);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }
}
