//! Configuration for the probe-sim driver.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including randomized defaults that are reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! All defaults are printed so runs are reproducible.

use probe_sim_core::{HashMethod, ProbeStrategy};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Complete configuration for a driver run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Table ===
    /// Number of slots
    pub size: usize,

    /// Hash function
    pub hash_method: HashMethod,

    /// Collision-resolution strategy
    pub probe_strategy: ProbeStrategy,

    // === Operations ===
    /// Keys to insert (None = generate random keys)
    pub insert_keys: Option<Vec<u64>>,

    /// Keys to search after the inserts
    pub search_keys: Vec<u64>,

    /// Keys to delete after the searches
    pub delete_keys: Vec<u64>,

    // === Random key generation ===
    /// Seed for generated keys
    pub seed: u64,

    /// How many random keys to generate
    pub key_count: usize,

    /// Generated keys fall in [1, key_max]
    pub key_max: u64,

    // === Behavior ===
    /// Whether to print resolved configuration
    pub print_config: bool,

    /// Whether to print each trace step
    pub print_steps: bool,

    /// Whether to print the metrics summary
    pub print_metrics: bool,

    /// Whether to dump the session as JSON at the end
    pub json: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no arguments are provided, generates randomized defaults using a
    /// time-based seed. If --seed is provided, uses that seed for all
    /// randomness (fully deterministic).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut size: Option<usize> = None;
        let mut hash_method: Option<HashMethod> = None;
        let mut probe_strategy: Option<ProbeStrategy> = None;
        let mut insert_keys: Option<Vec<u64>> = None;
        let mut search_keys: Vec<u64> = Vec::new();
        let mut delete_keys: Vec<u64> = Vec::new();
        let mut seed: Option<u64> = None;
        let mut key_count: Option<usize> = None;
        let mut key_max: Option<u64> = None;
        let mut print_config = false;
        let mut print_steps = true;
        let mut print_metrics = true;
        let mut json = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--size" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--size requires a number".to_string());
                    }
                    size = Some(args[i].parse().map_err(|_| "invalid size")?);
                }
                "--hash" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--hash requires a method name".to_string());
                    }
                    hash_method = Some(args[i].parse().map_err(|e| format!("{}", e))?);
                }
                "--probe" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--probe requires a strategy name".to_string());
                    }
                    probe_strategy = Some(args[i].parse().map_err(|e| format!("{}", e))?);
                }
                "--keys" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--keys requires a comma-separated list".to_string());
                    }
                    insert_keys = Some(parse_key_list(&args[i])?);
                }
                "--search" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--search requires a comma-separated list".to_string());
                    }
                    search_keys = parse_key_list(&args[i])?;
                }
                "--delete" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--delete requires a comma-separated list".to_string());
                    }
                    delete_keys = parse_key_list(&args[i])?;
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--count" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--count requires a number".to_string());
                    }
                    key_count = Some(args[i].parse().map_err(|_| "invalid count")?);
                }
                "--key-max" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--key-max requires a number".to_string());
                    }
                    key_max = Some(args[i].parse().map_err(|_| "invalid key-max")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-steps" => {
                    print_steps = false;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--json" => {
                    json = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64
        });

        // Generate defaults using seed
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let config = Config {
            size: size.unwrap_or(11),
            hash_method: hash_method.unwrap_or(HashMethod::Division),
            probe_strategy: probe_strategy.unwrap_or(ProbeStrategy::Linear),
            insert_keys,
            search_keys,
            delete_keys,
            seed,
            key_count: key_count.unwrap_or_else(|| rng.gen_range(5..=8)),
            key_max: key_max.unwrap_or(100),
            print_config,
            print_steps,
            print_metrics,
            json,
        };

        Ok(config)
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Table size: {}", self.size);
        println!("Hash method: {}", self.hash_method);
        println!("Probe strategy: {}", self.probe_strategy);
        println!();
        match &self.insert_keys {
            Some(keys) => println!("Insert keys: {:?}", keys),
            None => println!(
                "Insert keys: {} random in [1, {}] (seed {})",
                self.key_count, self.key_max, self.seed
            ),
        }
        if !self.search_keys.is_empty() {
            println!("Search keys: {:?}", self.search_keys);
        }
        if !self.delete_keys.is_empty() {
            println!("Delete keys: {:?}", self.delete_keys);
        }
        println!();
    }
}

/// Parse a comma-separated key list: `3,14,25`.
fn parse_key_list(s: &str) -> Result<Vec<u64>, String> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<u64>()
                .map_err(|_| format!("invalid key: {:?}", part.trim()))
        })
        .collect()
}

fn print_help() {
    println!("probe-sim: Educational hash table probing simulator");
    println!();
    println!("USAGE:");
    println!("    probe-sim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --size <N>         Table size (default: 11)");
    println!("    --hash <METHOD>    division | mid-square | folding (default: division)");
    println!("    --probe <STRAT>    linear | quadratic | double (default: linear)");
    println!();
    println!("    --keys <LIST>      Comma-separated keys to insert (default: random)");
    println!("    --search <LIST>    Comma-separated keys to search afterwards");
    println!("    --delete <LIST>    Comma-separated keys to delete afterwards");
    println!();
    println!("    --seed <N>         Random seed for generated keys");
    println!("    --count <N>        How many random keys (default: random 5-8)");
    println!("    --key-max <N>      Generated keys fall in [1, N] (default: 100)");
    println!();
    println!("    --print-config     Print resolved configuration");
    println!("    --no-steps         Don't print individual trace steps");
    println!("    --no-metrics       Don't print the metrics summary");
    println!("    --json             Dump the session as JSON");
    println!("    --help, -h         Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    probe-sim                                  # Random keys, classic setup");
    println!("    probe-sim --seed 42                        # Deterministic run");
    println!("    probe-sim --keys 3,14,25 --search 25       # The classic collision chain");
    println!("    probe-sim --size 7 --probe double          # Double hashing on a prime table");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_with_seed() {
        let config = Config::from_args(&args(&["--seed", "42"])).unwrap();
        assert_eq!(config.size, 11);
        assert_eq!(config.hash_method, HashMethod::Division);
        assert_eq!(config.probe_strategy, ProbeStrategy::Linear);
        assert_eq!(config.seed, 42);
        assert!((5..=8).contains(&config.key_count));
    }

    #[test]
    fn test_seeded_defaults_are_reproducible() {
        let a = Config::from_args(&args(&["--seed", "7"])).unwrap();
        let b = Config::from_args(&args(&["--seed", "7"])).unwrap();
        assert_eq!(a.key_count, b.key_count);
    }

    #[test]
    fn test_scripted_keys() {
        let config =
            Config::from_args(&args(&["--keys", "3,14,25", "--search", "25", "--delete", "3"]))
                .unwrap();
        assert_eq!(config.insert_keys, Some(vec![3, 14, 25]));
        assert_eq!(config.search_keys, vec![25]);
        assert_eq!(config.delete_keys, vec![3]);
    }

    #[test]
    fn test_method_and_strategy_parsing() {
        let config = Config::from_args(&args(&[
            "--hash",
            "mid-square",
            "--probe",
            "double",
            "--seed",
            "1",
        ]))
        .unwrap();
        assert_eq!(config.hash_method, HashMethod::MidSquare);
        assert_eq!(config.probe_strategy, ProbeStrategy::Double);
    }

    #[test]
    fn test_rejects_unknown_arguments() {
        assert!(Config::from_args(&args(&["--frobnicate"])).is_err());
        assert!(Config::from_args(&args(&["--hash", "sha256"])).is_err());
        assert!(Config::from_args(&args(&["--keys", "3,x,25"])).is_err());
        assert!(Config::from_args(&args(&["--size"])).is_err());
    }
}
