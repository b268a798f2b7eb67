use clap::Parser;

#[derive(Parser, Debug, PartialEq)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(about = "List distinct team identifiers, descending", alias = "var")]
    Variables,
    #[command(about = "List every team with its numeric id", alias = "ls")]
    Teams,
    #[command(about = "Show one statistic for every team", alias = "col")]
    Column {
        #[arg(required = true)]
        name: String,
    },
    #[command(about = "Show every statistic for one team", alias = "t")]
    Team {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    #[command(about = "Dump the whole table as JSON", alias = "all")]
    Dump,
}
