/// Name reported when the patch is applied or reverted
pub const PATCH_NAME: &str = "0_NimBLEAdvertisedDevice::findAdvField";
/// PlatformIO build directory at the project root
pub const PIO_DIR: &str = ".pio";
/// Directory under `.pio` holding per-environment library dependencies
pub const LIBDEPS_DIR: &str = "libdeps";
/// PlatformIO environment whose libdeps hold the target file
pub const DEFAULT_ENV: &str = "dictionary";
/// Vendored library containing the target file
pub const LIBRARY_DIR: &str = "NimBLE-Arduino";
/// Source directory within the library
pub const LIBRARY_SRC_DIR: &str = "src";
/// File name shared by the target and its replacement
pub const TARGET_FILENAME: &str = "NimBLEAdvertisedDevice.cpp";
/// Directory at the project root holding patch material
pub const PATCHES_DIR: &str = "patches";
/// Directory under `patches` holding replacement files
pub const NEW_FILES_DIR: &str = "new_files";
/// Suffix appended to the target path to form the backup path
pub const BACKUP_EXTENSION: &str = ".bak";
