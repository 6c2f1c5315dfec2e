use clap::Parser;

/// Described with clap, parsed by progopts.
#[derive(Parser, Debug)]
#[clap(name = "fetch", about = "pretend to download urls")]
pub struct Fetch {
    #[clap(short = 'u', long, num_args = 1.., required = true, help = "urls to download")]
    pub urls: Vec<String>,
    #[clap(short = 'o', long, help = "output directory")]
    pub out: Option<String>,
    #[clap(short = 'q', long)]
    pub quiet: bool,
}
