//! Round-robin API key example

use envsettings::{endless_param_iterator, get_str_env_param, get_values, param_iterator};
use std::io::Write;
use tempfile::NamedTempFile;

fn main() -> anyhow::Result<()> {
    // Keys given inline
    std::env::set_var("API_KEYS", "key-a,key-b,key-c");
    let inline = get_str_env_param("API_KEYS", None, true)?;
    let keys = get_values(inline.as_deref(), None, None)?;

    let mut rotation = endless_param_iterator(keys)?;
    for request in 1..=5 {
        println!("request {request}: {:?}", rotation.next());
    }

    // Keys stored in a file, one per line
    let mut keys_file = NamedTempFile::new()?;
    writeln!(keys_file, "file-key-1")?;
    writeln!(keys_file, "file-key-2")?;
    std::env::set_var("API_KEYS", keys_file.path());

    let source = get_str_env_param("API_KEYS", None, true)?;
    for key in param_iterator(get_values(source.as_deref(), None, Some("fallback-key"))?) {
        println!("file key: {key}");
    }

    Ok(())
}
