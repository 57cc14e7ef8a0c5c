use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("dynamic library `{}` could not be loaded: `{source}`", path.display())]
    Library {
        source: libloading::Error,
        path: std::path::PathBuf,
    },
    #[error("entry point `{name}` could not be found: `{source}`")]
    Symbol {
        name: &'static str,
        source: libloading::Error,
    },
    #[error("the system was unable to find the required Pixelink registry setting `{key}`")]
    RegistrationMissing { key: &'static str },
    #[error("cannot parse `{version}` as a Pixelink API version")]
    InvalidVersion { version: String },
}
