pub mod handlers;

// Re-export the helpers behind the check command
pub use handlers::{
    CheckReport, build_check_report, form_config, load_option_input, raw_input_from_args,
};
