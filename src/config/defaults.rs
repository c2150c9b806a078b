pub fn site_name() -> String {
    "My Recipes".to_string()
}

pub fn recipes_dir() -> String {
    "recipes".to_string()
}

pub fn index_file() -> String {
    "recipes.json".to_string()
}

pub fn port() -> u16 {
    5000
}

/// Conventional config filename looked up in the working directory.
pub const CONFIG_FILE: &str = "larder.toml";
