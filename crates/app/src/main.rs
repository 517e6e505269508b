//! probe-sim: drive the hash table engine from the command line.
//!
//! Builds an explicitly owned engine, runs a scripted (or seeded-random)
//! operation sequence against it, and prints each operation's trace, the
//! final table snapshot, and the session metrics. With `--json`, the whole
//! session is also dumped as JSON in the engine's wire format.

mod config;
mod keygen;
mod logger;

use config::Config;
use probe_sim_core::{HashTable, Trace};
use serde_json::json;

fn main() {
    logger::initialize_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(error) = run(&config) {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> probe_sim_core::Result<()> {
    let mut table = HashTable::new(config.size)?;
    table.set_hash_method(config.hash_method);
    table.set_probe_strategy(config.probe_strategy);

    let insert_keys = match &config.insert_keys {
        Some(keys) => keys.clone(),
        None => {
            let keys = keygen::generate_keys(config.seed, config.key_count, config.key_max);
            println!(
                "Generated keys (seed {}): {:?}",
                config.seed, keys
            );
            keys
        }
    };

    // Collected for the optional JSON dump at the end.
    let mut session: Vec<(&'static str, u64, Trace)> = Vec::new();

    println!("=== Inserts ===");
    for &key in &insert_keys {
        let trace = table.insert(key, None)?;
        report("insert", key, &trace, config);
        session.push(("insert", key, trace));
    }

    if !config.search_keys.is_empty() {
        println!("\n=== Searches ===");
        for &key in &config.search_keys {
            let outcome = table.search(key)?;
            report("search", key, &outcome.trace, config);
            session.push(("search", key, outcome.trace));
        }
    }

    if !config.delete_keys.is_empty() {
        println!("\n=== Deletes ===");
        for &key in &config.delete_keys {
            let trace = table.delete(key)?;
            report("delete", key, &trace, config);
            session.push(("delete", key, trace));
        }
    }

    print_table(&table);

    if config.print_metrics {
        table.metrics().print_summary();
    }

    if config.json {
        let operations: Vec<_> = session
            .iter()
            .map(|(op, key, trace)| json!({ "op": op, "key": key, "trace": trace }))
            .collect();
        let dump = json!({
            "size": table.size(),
            "hash_method": config.hash_method,
            "probe_strategy": config.probe_strategy,
            "operations": operations,
            "table": table.table_state(),
            "load_factor": table.load_factor(),
        });
        let rendered =
            serde_json::to_string_pretty(&dump).expect("session JSON serializes");
        println!("\n{}", rendered);
    }

    Ok(())
}

/// Print one operation's trace by walking a replay cursor, the way an
/// animating consumer would.
fn report(op: &str, key: u64, trace: &Trace, config: &Config) {
    if !config.print_steps {
        if let Some(last) = trace.last() {
            println!("{} {}: {}", op, key, last.description);
        }
        return;
    }

    println!("--- {} {}", op, key);
    for step in trace.replay() {
        println!("    {}", step.description);
    }
}

/// Print the final table snapshot.
fn print_table(table: &HashTable) {
    println!(
        "\n=== Hash Table (size {}, load factor {:.1}%) ===",
        table.size(),
        table.load_factor()
    );
    for slot in table.table_state() {
        match slot.value {
            Some(value) => println!("  [{:>3}] {}", slot.index, value),
            None => println!("  [{:>3}] -", slot.index),
        }
    }
}
