use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use strcore::{intersect, sort, StdAllocator};
use structopt::StructOpt;

#[derive(StructOpt)]
enum Command {
    /// Time lexicographic sort over a newline-delimited file of strings.
    Sort {
        input: PathBuf,
    },
    /// Time set intersection between two newline-delimited files of strings.
    Intersect {
        left: PathBuf,
        right: PathBuf,
        #[structopt(long, default_value = "0")]
        seed: u64,
    },
    /// Time case-insensitive search for `needle` in the contents of `haystack`.
    Find {
        haystack: PathBuf,
        needle: String,
    },
}

fn read_lines(path: &PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

fn main() {
    match Command::from_args() {
        Command::Sort { input } => {
            let data = read_lines(&input);
            let mut order: Vec<usize> = (0..data.len()).collect();
            let start = Instant::now();
            sort(&data, &StdAllocator, &mut order).unwrap();
            let elapsed = start.elapsed();
            println!(
                "sorted {} strings in {:.3}ms",
                data.len(),
                elapsed.as_secs_f64() * 1000.0
            );
        }
        Command::Intersect { left, right, seed } => {
            let a = read_lines(&left);
            let b = read_lines(&right);
            let cap = a.len().min(b.len());
            let mut out_a = vec![0usize; cap];
            let mut out_b = vec![0usize; cap];
            let start = Instant::now();
            let n = intersect(&a, &b, &StdAllocator, seed, &mut out_a, &mut out_b).unwrap();
            let elapsed = start.elapsed();
            println!(
                "found {} matches between {} and {} strings in {:.3}ms",
                n,
                a.len(),
                b.len(),
                elapsed.as_secs_f64() * 1000.0
            );
        }
        Command::Find { haystack, needle } => {
            let text = fs::read(&haystack).unwrap();
            let start = Instant::now();
            let result = strcore::find_case_insensitive(&text, needle.as_bytes());
            let elapsed = start.elapsed();
            match result {
                Some((offset, len)) => println!(
                    "match at byte {offset}, length {len} ({:.3}ms)",
                    elapsed.as_secs_f64() * 1000.0
                ),
                None => println!("no match ({:.3}ms)", elapsed.as_secs_f64() * 1000.0),
            }
        }
    }
}
