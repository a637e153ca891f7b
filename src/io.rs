use std::io::Write;
pub mod stl;
pub mod xml;

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    Xml(::xml::reader::Error),
    XmlWrite(::xml::writer::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::Xml(error) => write!(f, "- XML Parsing Error:\n{}", error),
            IoErrorType::XmlWrite(error) => write!(f, "- XML Writing Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl IoError {
    /// Attach a file path to an error cause.
    pub fn with_file(path: &str, cause: IoErrorType) -> Self {
        IoError{file: Some(path.to_string()), cause}
    }
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n- {}", file, self.cause),
            None => write!(f, "- {}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path).map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes()).map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    match path.split('.').last(){
        Some("json") => {
            let cfg: T = match serde_json::from_reader(open(path)?) {
                Ok(cfg) => cfg,
                Err(error) => return Err(IoError::with_file(path, IoErrorType::SerdeJson(error))),
            };
            Ok(cfg)
        },
        Some("toml") => {
            let cfg: T = match toml::from_str(&read_to_string(path)?) {
                Ok(cfg) => cfg,
                Err(error) => return Err(IoError::with_file(path, IoErrorType::TomlDe(error))),
            };
            Ok(cfg)
        },
        Some("yaml") | Some("yml") => {
            let cfg: T = match serde_yaml::from_reader(open(path)?) {
                Ok(cfg) => cfg,
                Err(error) => return Err(IoError::with_file(path, IoErrorType::SerdeYaml(error))),
            };
            Ok(cfg)
        },
        _ => {
            let supported_filetypes = vec!["json", "toml", "yaml", "yml"];
            let error_string = format!("Unsupported filetype for config file: {}\nSupported filetypes: {:?}", path, supported_filetypes);
            Err(IoError::with_file(path, IoErrorType::StringOnly(error_string)))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct SmallCfg {
        name: String,
        #[serde(default)]
        count: usize,
    }

    fn temp_path(name: &str) -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("quadset-io-{}-{}", std::process::id(), name));
        path.to_string_lossy().to_string()
    }

    #[test]
    fn read_cfg_by_extension() {
        let yaml_path = temp_path("cfg.yaml");
        write_to_file(&yaml_path, "name: track\ncount: 3\n").unwrap();
        let cfg: SmallCfg = read_cfg_file(&yaml_path).unwrap();
        assert_eq!(cfg.name, "track");
        assert_eq!(cfg.count, 3);

        let json_path = temp_path("cfg.json");
        write_to_file(&json_path, "{\"name\": \"oval\"}").unwrap();
        let cfg: SmallCfg = read_cfg_file(&json_path).unwrap();
        assert_eq!(cfg.name, "oval");
        assert_eq!(cfg.count, 0);

        let toml_path = temp_path("cfg.toml");
        write_to_file(&toml_path, "name = \"loop\"\ncount = 7\n").unwrap();
        let cfg: SmallCfg = read_cfg_file(&toml_path).unwrap();
        assert_eq!(cfg.name, "loop");
        assert_eq!(cfg.count, 7);
    }

    #[test]
    fn unsupported_cfg_extension() {
        let path = temp_path("cfg.ini");
        write_to_file(&path, "name=track").unwrap();
        let error = read_cfg_file::<SmallCfg>(&path).unwrap_err();
        assert_eq!(error.file.as_deref(), Some(path.as_str()));
        assert!(matches!(error.cause, IoErrorType::StringOnly(_)));
    }

    #[test]
    fn missing_file_names_path() {
        let error = open("no/such/dir/quads.xml").unwrap_err();
        assert!(matches!(error.cause, IoErrorType::File(_)));
        assert!(error.to_string().contains("no/such/dir/quads.xml"));
    }
}
