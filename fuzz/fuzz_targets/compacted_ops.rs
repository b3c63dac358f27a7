#![no_main]
use libfuzzer_sys::fuzz_target;
use compacted::{CompactedArray, U32Converter};

fuzz_target!(|data: (Vec<(u16, u32)>, u32)| {
    let (pairs, probe_seed) = data;
    // Bound the index universe so the delta sum stays well below u32::MAX.
    if pairs.is_empty() || pairs.len() > 10_000 {
        return;
    }

    // Build a strictly ascending index sequence from positive deltas.
    let mut next = 0u32;
    let mut indices = Vec::with_capacity(pairs.len());
    let mut values = Vec::with_capacity(pairs.len());
    for &(delta, value) in &pairs {
        next += delta as u32 + 1;
        indices.push(next - 1);
        values.push(value);
    }

    let arr = CompactedArray::new(U32Converter, &indices, &values).unwrap();

    assert_eq!(arr.len(), indices.len());
    assert_eq!(arr.elts().len(), indices.len() * 4);

    for (&idx, &val) in indices.iter().zip(&values) {
        assert!(arr.has(idx));
        assert_eq!(arr.get(idx), Some(val));
    }

    // Probe an arbitrary index; presence must agree with the input set.
    let max = *indices.last().unwrap();
    let probe = probe_seed % max.saturating_add(100);
    let present = indices.binary_search(&probe).is_ok();
    assert_eq!(arr.has(probe), present);
    assert_eq!(arr.get(probe).is_some(), present);
});
