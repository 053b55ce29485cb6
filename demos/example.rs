use dragon_cfg::ConfigFile;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[allow(dead_code)]
struct DatabaseSection {
    host: String,
    port: u16,
    url: String,
}

fn main() -> Result<(), dragon_cfg::ConfigError> {
    let config = ConfigFile::load("demos/app.json")?;

    let name = config.string("name")?;
    let debug = config.must_bool("debug");
    let hosts = config.must_slice_string("hosts");
    let limits = config.must_map_string_float64("limits");
    let timeout = config.always_float64("timeout", Some(30.0));

    let mut database = DatabaseSection::default();
    config.must_set("database", &mut database);

    println!("App: {name} (debug={debug})");
    println!("Hosts: {}", hosts.join(", "));
    println!("Request limit: {}", limits["requests"]);
    println!("Timeout: {timeout}s");
    println!("Database URL: {}", database.url);

    Ok(())
}
