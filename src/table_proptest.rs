#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can inspect
// bucket-level state through crate-private accessors.

use crate::config::{BucketPolicy, TableConfig};
use crate::digest::{CodePointSum, KeyDigest};
use crate::table::HashTable;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations so shrinking converges on small key sets.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, String),
    Get(usize),
    GetFresh(String),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-dA-D]{0,4}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), "[a-z]{0,6}").prop_map(|(i, v)| OpI::Put(i, v)),
            idx.clone().prop_map(OpI::Get),
            "[a-z\u{e9}\u{ac00}]{0,5}".prop_map(OpI::GetFresh),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

#[derive(Clone, Default)]
struct ConstDigest;
impl KeyDigest for ConstDigest {
    fn digest(&self, _key: &str) -> u64 {
        0
    }
}

// Drives the table and a std HashMap model through the same operations and
// checks after every step:
// - get parity with the model (Found/NotFound and the value itself);
// - len parity;
// - the sum of chain lengths equals len (one entry per distinct key);
// - every stored key lives in bucket `digest % capacity`.
fn run<S: KeyDigest>(
    mut sut: HashTable<S>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, String> = HashMap::new();
    for op in ops {
        match op {
            OpI::Put(i, v) => {
                let k = &pool[i];
                let idx = sut.bucket_index(k);
                let before = sut.chain_len(idx);
                let existed = model.contains_key(k);
                sut.put(k, v.clone());
                model.insert(k.clone(), v);
                let expected = if existed { before } else { before + 1 };
                prop_assert_eq!(sut.chain_len(idx), expected);
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k).value(), model.get(k).map(String::as_str));
            }
            OpI::GetFresh(k) => {
                prop_assert_eq!(sut.get(&k).value(), model.get(&k).map(String::as_str));
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        let total: usize = (0..sut.capacity()).map(|i| sut.chain_len(i)).sum();
        prop_assert_eq!(total, model.len());
        for k in model.keys() {
            let idx = (sut.digest_of(k) % sut.capacity() as u64) as usize;
            prop_assert_eq!(sut.bucket_index(k), idx);
            prop_assert!(sut.is_materialized(idx));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(), cap in 1usize..=16) {
        run(HashTable::new(cap).unwrap(), &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_eager((pool, ops) in arb_scenario(), cap in 1usize..=16) {
        let cfg = TableConfig::new(cap).with_bucket_policy(BucketPolicy::Eager);
        run(HashTable::with_config(cfg).unwrap(), &pool, ops)?;
    }

    // Worst case: every key collides into bucket 0.
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario(), cap in 1usize..=16) {
        run(HashTable::with_digest(cap, ConstDigest).unwrap(), &pool, ops)?;
    }

    #[test]
    fn prop_digest_order_insensitive(s in "\\PC{0,12}") {
        let rev: String = s.chars().rev().collect();
        prop_assert_eq!(CodePointSum.digest(&s), CodePointSum.digest(&rev));
    }

    #[test]
    fn prop_index_in_range(key in "\\PC{0,16}", cap in 1usize..=4096) {
        let t = HashTable::new(cap).unwrap();
        prop_assert!(t.bucket_index(&key) < cap);
    }
}
