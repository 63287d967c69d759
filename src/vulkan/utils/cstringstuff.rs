use std::{
    ffi::{CStr, CString},
    os::raw::c_char,
};

pub fn c_char_slice_to_cstring(input: &[c_char]) -> CString {
    let bytes: Vec<u8> = input
        .iter()
        .take_while(|byte| **byte != 0)
        .map(|byte| *byte as u8)
        .collect();
    // take_while stopped at the first NUL
    unsafe { CString::from_vec_unchecked(bytes) }
}

/// # Safety
/// Every pointer must reference a valid NUL-terminated string.
pub unsafe fn raw_to_cstring(raw: &[*const c_char]) -> Vec<CString> {
    raw.iter().map(|ptr| CStr::from_ptr(*ptr).to_owned()).collect()
}

pub fn cstring_slice_to_raw(names: &[CString]) -> Vec<*const c_char> {
    names.iter().map(|name| name.as_ptr()).collect()
}
