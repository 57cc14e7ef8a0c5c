use std::path::{Path, PathBuf};

use crate::funcs::PxLApi;
use crate::LoadError;

/// Root of the Linux SDK installation.
pub const PIXELINK_SDK_LIB: &str = "PIXELINK_SDK_LIB";

/// Dotted, numerically ordered API version such as `4.2.5.11`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    parts: Vec<u32>,
}

impl ApiVersion {
    pub fn new(parts: &[u32]) -> Self {
        Self {
            parts: parts.to_vec(),
        }
    }

    pub fn parts(&self) -> &[u32] {
        &self.parts
    }
}

impl std::str::FromStr for ApiVersion {
    type Err = LoadError;
    fn from_str(s: &str) -> Result<Self, LoadError> {
        let invalid = || LoadError::InvalidVersion {
            version: s.to_string(),
        };
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }
        let parts = trimmed
            .split('.')
            .map(|p| p.parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { parts })
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for p in &self.parts {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{p}")?;
            first = false;
        }
        Ok(())
    }
}

/// Everything about finding the Pixelink library that differs by OS.
pub trait Platform {
    const NAME: &'static str;

    /// Fail if the SDK installer did not register itself.
    fn check_registration() -> Result<(), LoadError>;

    fn library_path() -> PathBuf;

    fn minimum_version() -> ApiVersion;

    /// Version of the library at `path`, if it can be determined.
    fn installed_version(path: &Path) -> Option<ApiVersion>;
}

#[cfg(target_os = "windows")]
pub struct Windows;

#[cfg(target_os = "windows")]
impl Platform for Windows {
    const NAME: &'static str = "Windows";

    fn check_registration() -> Result<(), LoadError> {
        use windows::Win32::Foundation::ERROR_SUCCESS;
        use windows::Win32::System::Registry::{
            HKEY, HKEY_CURRENT_USER, KEY_READ, RegCloseKey, RegOpenKeyExW,
        };
        let mut hkey = HKEY::default();
        let status = unsafe {
            RegOpenKeyExW(
                HKEY_CURRENT_USER,
                windows::core::w!(r"Software\PixeLINK"),
                0,
                KEY_READ,
                &mut hkey,
            )
        };
        if status != ERROR_SUCCESS {
            return Err(LoadError::RegistrationMissing {
                key: r"HKEY_CURRENT_USER\Software\PixeLINK",
            });
        }
        let _ = unsafe { RegCloseKey(hkey) };
        Ok(())
    }

    fn library_path() -> PathBuf {
        PathBuf::from("PxLAPI40.dll")
    }

    fn minimum_version() -> ApiVersion {
        ApiVersion::new(&[4, 2, 5, 11])
    }

    fn installed_version(path: &Path) -> Option<ApiVersion> {
        windows_file_version(path)
    }
}

/// Read the fixed file version resource of a module that is already loaded.
#[cfg(target_os = "windows")]
fn windows_file_version(path: &Path) -> Option<ApiVersion> {
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Storage::FileSystem::{
        GetFileVersionInfoSizeW, GetFileVersionInfoW, VS_FIXEDFILEINFO, VerQueryValueW,
    };
    use windows::Win32::System::LibraryLoader::{GetModuleFileNameW, GetModuleHandleW};
    use windows::core::PCWSTR;

    let name: Vec<u16> = path.as_os_str().encode_wide().chain(Some(0)).collect();
    let module = unsafe { GetModuleHandleW(PCWSTR(name.as_ptr())) }.ok()?;
    let mut full = vec![0u16; 1024];
    let len = unsafe { GetModuleFileNameW(module, &mut full) } as usize;
    if len == 0 {
        return None;
    }
    full.truncate(len);
    full.push(0);
    let full_path = PCWSTR(full.as_ptr());

    let size = unsafe { GetFileVersionInfoSizeW(full_path, None) };
    if size == 0 {
        return None;
    }
    let mut block = vec![0u8; size as usize];
    unsafe { GetFileVersionInfoW(full_path, 0, size, block.as_mut_ptr() as _) }.ok()?;

    let mut info: *mut std::ffi::c_void = std::ptr::null_mut();
    let mut info_len = 0u32;
    let found = unsafe {
        VerQueryValueW(
            block.as_ptr() as _,
            windows::core::w!("\\"),
            &mut info,
            &mut info_len,
        )
    };
    if !found.as_bool() || info.is_null() {
        return None;
    }
    let fixed = unsafe { *(info as *const VS_FIXEDFILEINFO) };
    Some(ApiVersion::new(&[
        fixed.dwFileVersionMS >> 16,
        fixed.dwFileVersionMS & 0xFFFF,
        fixed.dwFileVersionLS >> 16,
        fixed.dwFileVersionLS & 0xFFFF,
    ]))
}

#[cfg(not(target_os = "windows"))]
pub struct Linux;

#[cfg(not(target_os = "windows"))]
impl Platform for Linux {
    const NAME: &'static str = "Linux";

    fn check_registration() -> Result<(), LoadError> {
        // Nothing is registered; the loader search path decides.
        Ok(())
    }

    fn library_path() -> PathBuf {
        if let Some(root) = std::env::var_os(PIXELINK_SDK_LIB) {
            let candidate = PathBuf::from(root).join("libPxLApi.so");
            if candidate.exists() {
                return candidate;
            }
        }
        PathBuf::from("libPxLApi.so")
    }

    fn minimum_version() -> ApiVersion {
        ApiVersion::new(&[4, 2, 2, 3])
    }

    fn installed_version(_path: &Path) -> Option<ApiVersion> {
        if let Some(root) = std::env::var_os(PIXELINK_SDK_LIB) {
            if let Some(version) = find_versioned_so(Path::new(&root)) {
                return Some(version);
            }
        }
        // Found through the loader search path: the mapping names the
        // versioned file the soname link resolved to.
        let maps = std::fs::read_to_string("/proc/self/maps").ok()?;
        version_from_maps(&maps)
    }
}

fn version_from_file_name(path: &Path) -> Option<ApiVersion> {
    let fname = path.file_name()?.to_str()?;
    fname.strip_prefix("libPxLApi.so.")?.parse().ok()
}

/// Search `root` recursively for `libPxLApi.so.<version>` and parse the
/// version from the first match.
pub fn find_versioned_so(root: &Path) -> Option<ApiVersion> {
    let pattern = root.join("**").join("libPxLApi.so.*");
    let pattern = pattern.to_str()?;
    let mut paths: Vec<PathBuf> = glob::glob(pattern).ok()?.filter_map(|p| p.ok()).collect();
    paths.sort();
    paths.into_iter().find_map(|p| version_from_file_name(&p))
}

/// Version of the `libPxLApi.so.<version>` mapped into a process, given the
/// contents of its `/proc/<pid>/maps`.
pub fn version_from_maps(maps: &str) -> Option<ApiVersion> {
    maps.lines()
        .filter_map(|line| line.split_whitespace().nth(5))
        .find_map(|path| version_from_file_name(Path::new(path)))
}

#[cfg(target_os = "windows")]
pub type HostPlatform = Windows;
#[cfg(not(target_os = "windows"))]
pub type HostPlatform = Linux;

/// Outcome of comparing the installed API against the supported minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    Supported,
    TooOld,
    Unknown,
}

/// Compare versions and warn when the installed one is older or unknown.
/// Never fails.
pub fn check_version(installed: Option<&ApiVersion>, minimum: &ApiVersion) -> VersionCheck {
    match installed {
        Some(v) if v >= minimum => VersionCheck::Supported,
        Some(v) => {
            tracing::warn!(
                "Pixelink API version {v} detected. These bindings were designed for API \
                version {minimum}; upgrade to the latest Pixelink SDK for full functionality \
                and performance."
            );
            VersionCheck::TooOld
        }
        None => {
            tracing::warn!(
                "Could not determine the installed Pixelink API version (need at least {minimum})."
            );
            VersionCheck::Unknown
        }
    }
}

/// A loaded Pixelink library together with where it came from.
pub struct LoadedLibrary {
    pub api: PxLApi,
    pub path: PathBuf,
    pub version: Option<ApiVersion>,
}

/// Resolve, load and version-check the library using platform `P`.
pub fn load_with<P: Platform>() -> Result<LoadedLibrary, LoadError> {
    P::check_registration()?;
    let path = P::library_path();
    tracing::debug!("loading Pixelink API for {} from {}", P::NAME, path.display());
    let api = unsafe { PxLApi::new(&path) }?;
    let version = P::installed_version(&path);
    check_version(version.as_ref(), &P::minimum_version());
    Ok(LoadedLibrary { api, path, version })
}

pub fn load() -> Result<LoadedLibrary, LoadError> {
    load_with::<HostPlatform>()
}
