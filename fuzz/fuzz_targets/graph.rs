#![no_main]

use libfuzzer_sys::fuzz_target;
use objsize::fuzz::graph::{harness, Data};

fuzz_target!(|data: Data| harness(data));
