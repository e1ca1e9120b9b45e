use super::Parser;

#[derive(Parser, Debug)]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,

    /// User whose market permissions are printed
    #[arg(long)]
    pub user_id: String,
}
