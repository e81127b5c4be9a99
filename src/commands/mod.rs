pub mod patch_apply;
pub mod patch_revert;
pub mod patch_status;
