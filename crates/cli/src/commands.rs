use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a query document and print its canonical JSON form
    Ast {
        #[arg(long, help = "Query document path, or - for stdin")]
        input: String,

        #[arg(
            long,
            help = "If specified, writes the canonical JSON to this file instead of stdout"
        )]
        output: Option<String>,

        #[arg(long, help = "Print compact JSON instead of pretty-printed")]
        compact: bool,
    },
    /// Decode a query document and report whether it is valid
    Check {
        #[arg(long, help = "Query document path, or - for stdin")]
        input: String,
    },
    /// Render a query document as a readable outline of its filter, sort and page
    Outline {
        #[arg(long, help = "Query document path, or - for stdin")]
        input: String,
    },
}
