pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod option;
pub mod request;
pub mod submit;
pub mod validate;

use colored::Colorize;

pub use config::FormConfig;
pub use error::{Field, FieldError, FieldErrors, InputError, SubmitError};
pub use form::{BaseUrlForm, FormEvent, OptionsForm, Selection, SubmitStatus};
pub use input::RawOptionInput;
pub use option::{CATALOG, CrawlOption, CrawlOptionId, catalog};
pub use request::{CrawlRequest, CrawlScope};
pub use submit::{SubmitResult, Submitter};

const BANNER: &str = r#"
   ┌─┐┬─┐┌─┐┬ ┬┬  ┌─┐┌─┐┌─┐┌─┐┌─┐
   │  ├┬┘├─┤││││  └─┐│  │ │├─┘├┤
   └─┘┴└─┴ ┴└┴┘┴─┘└─┘└─┘└─┘┴  └─┘
"#;

pub fn print_banner() {
    println!("{}", BANNER.bright_cyan().bold());
    println!(
        "   {} {}\n",
        "crawlscope".bright_white().bold(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
}
