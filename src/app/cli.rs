use clap::Parser;
use std::path::PathBuf;

use crate::connectivity::Strategy;
use crate::numbers::TermDomain;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Checks whether m + n ~ m² + n² + 1 links every integer in [1, N] into one class.", long_about = None)]
pub struct Cli {
    /// Upper bound N of the checked range [1, N]
    pub max_n: usize,

    /// Algorithm used for the check and the path queries.
    #[clap(short, long, value_enum, default_value_t = Strategy::UnionFind)]
    pub strategy: Strategy,

    /// Smallest term allowed for m and n.
    #[clap(short, long, value_enum, default_value_t = TermDomain::Natural)]
    pub domain: TermDomain,

    /// Query a witness path between A and B. May be repeated.
    #[clap(long, num_args = 2, value_names = ["A", "B"])]
    pub pair: Vec<usize>,

    /// Query and verify every pair 1 <= a < b <= N.
    #[clap(long)]
    pub all_pairs: bool,

    /// File receiving the verbose log.
    #[clap(long, default_value = "coloring.log")]
    pub log_file: PathBuf,

    /// Suppress verbose output, only printing the final summary.
    #[clap(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The queries requested on the command line, in order.
    pub fn queries(&self) -> Vec<(usize, usize)> {
        let mut queries: Vec<(usize, usize)> = self
            .pair
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        if self.all_pairs {
            for a in 1..=self.max_n {
                queries.extend(((a + 1)..=self.max_n).map(|b| (a, b)));
            }
        }
        queries
    }
}
