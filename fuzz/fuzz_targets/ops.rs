#![no_main]
use std::convert::TryInto;

use libfuzzer_sys::{arbitrary::Unstructured, fuzz_target};
use probe_table::{
    ops::{first_divergence, Op},
    ProbingHashTable,
};

fuzz_target!(|bytes| {
    const MAX_CAPACITY: usize = 64;

    let mut u = Unstructured::new(bytes);
    if let (Ok(capacity), Ok(ops)) = (
        u.int_in_range(1..=MAX_CAPACITY),
        u.arbitrary::<Vec<Op<u8>>>(),
    ) {
        let mut table = ProbingHashTable::with_capacity(capacity.try_into().unwrap());
        assert_eq!(first_divergence(&mut table, &ops), None, "{:?}", table);
    }
});
