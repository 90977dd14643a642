//! Target support; candidates for factoring out.

cfg_if::cfg_if! {
    if #[cfg(target_os = "none")] {
        pub mod stm32;
    }
}
