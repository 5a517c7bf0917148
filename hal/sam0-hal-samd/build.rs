//! Build script for sam0-hal-samd
//!
//! Refuses to build unless exactly one chip variant feature is enabled.
//! Each variant selects a different AIN pin table.

macro_rules! assert_unique_features {
    () => {};

    ( $first:tt $(,$rest:tt)* ) => {
        $(
            #[cfg(all(feature = $first, feature = $rest))]
            compile_error!(concat!("Features \"", $first, "\" and \"", $rest, "\" cannot be used together"));
        )*
        assert_unique_features!($($rest),*);
    };
}

macro_rules! assert_used_features {
    ( $($all:tt),* ) => {
        #[cfg(not(any($(feature = $all),*)))]
        compile_error!(concat!("ADC pin mappings are not defined for this device. One of the chip variant features must be provided: ", $($all, ", "),*));
    }
}

macro_rules! assert_unique_used_features {
    ( $($all:tt),* ) => {
        assert_unique_features!($($all),*);
        assert_used_features!($($all),*);
    }
}

assert_unique_used_features!(
    "samd20e", "samd21e", "samd20g", "samd21g", "samd20j", "samd21j", "samr21e", "samr21g",
    "samd10c", "samd11c", "samd10ds", "samd11ds", "samd10dm", "samd11dm"
);

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
}
