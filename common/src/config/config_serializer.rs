use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// YAML on `serde_yaml_ng`, with an optional `#` comment header on write.
#[derive(Default)]
pub struct YamlConfigSerializer {
    header: Option<String>,
}

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self { header: None }
    }

    pub fn with_header(header: &str) -> Self {
        Self {
            header: Some(header.to_string()),
        }
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        let body = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        match self.header {
            Some(ref header) => {
                let comment: String = header.lines().map(|line| format!("# {}\n", line)).collect();
                Ok(comment + &body)
            }
            None => Ok(body),
        }
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}
