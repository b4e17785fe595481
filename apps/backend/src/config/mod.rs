pub mod rules;
pub mod server;

pub use rules::{load_rules_file, rules_from_env, standard_rules, RULES_FILE_ENV};
pub use server::ServerConfig;
