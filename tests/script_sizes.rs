//! Cross-checks the size tables against outputs and inputs serialized
//! with the `bitcoin` crate.

use bitcoin::absolute::LockTime;
use bitcoin::consensus::serialize;
use bitcoin::hashes::Hash;
use bitcoin::opcodes::all::{OP_CHECKMULTISIG, OP_PUSHNUM_1};
use bitcoin::opcodes::OP_0;
use bitcoin::script::{Builder, PushBytesBuf};
use bitcoin::transaction::Version;
use bitcoin::{
    Amount, OutPoint, PubkeyHash, ScriptBuf, ScriptHash, Sequence, Transaction, TxIn, TxOut,
    WPubkeyHash, WScriptHash, Witness,
};
use btc_size_fee::{
    calc_tx_size_with, input_size, EstimationOptions, EstimationParams, ScriptType,
};

fn push_bytes(len: usize) -> PushBytesBuf {
    PushBytesBuf::try_from(vec![0x02u8; len]).expect("push fits")
}

fn serialized_output_len(script_pubkey: ScriptBuf) -> u64 {
    serialize(&TxOut {
        value: Amount::ZERO,
        script_pubkey,
    })
    .len() as u64
}

fn multisig_redeem_script(m: i64, n: usize) -> ScriptBuf {
    let mut builder = Builder::new().push_int(m);
    for _ in 0..n {
        builder = builder.push_slice(push_bytes(33));
    }
    builder.push_int(n as i64).push_opcode(OP_CHECKMULTISIG).into_script()
}

#[test]
fn output_table_matches_serialized_outputs() {
    let p2pkh = ScriptBuf::new_p2pkh(&PubkeyHash::from_byte_array([0u8; 20]));
    let p2sh = ScriptBuf::new_p2sh(&ScriptHash::from_byte_array([0u8; 20]));
    let p2wpkh = ScriptBuf::new_p2wpkh(&WPubkeyHash::from_byte_array([0u8; 20]));
    let p2wsh = ScriptBuf::new_p2wsh(&WScriptHash::from_byte_array([0u8; 32]));
    let p2tr = Builder::new()
        .push_opcode(OP_PUSHNUM_1)
        .push_slice(push_bytes(32))
        .into_script();

    let cases = [
        (ScriptType::P2pkh, p2pkh),
        (ScriptType::P2sh, p2sh.clone()),
        (ScriptType::P2shP2wpkh, p2sh.clone()),
        (ScriptType::P2shP2wsh, p2sh),
        (ScriptType::P2wpkh, p2wpkh),
        (ScriptType::P2wsh, p2wsh),
        (ScriptType::P2tr, p2tr),
    ];

    for (script_type, script_pubkey) in cases {
        assert_eq!(
            script_type.output_size().whole_bytes(),
            serialized_output_len(script_pubkey),
            "{} output size",
            script_type
        );
    }
}

#[test]
fn legacy_transaction_matches_serialized_size() {
    // signature push + compressed pubkey push
    let script_sig = Builder::new()
        .push_slice(push_bytes(72))
        .push_slice(push_bytes(33))
        .into_script();
    let tx = Transaction {
        version: Version::ONE,
        lock_time: LockTime::ZERO,
        input: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: Sequence::MAX,
            witness: Witness::new(),
        }],
        output: vec![TxOut {
            value: Amount::from_sat(10_000),
            script_pubkey: ScriptBuf::new_p2pkh(&PubkeyHash::from_byte_array([0u8; 20])),
        }],
    };

    let options = EstimationOptions::new()
        .with_input_count(1)
        .with_p2pkh_output_count(1);
    let result = calc_tx_size_with(Some(&options)).expect("valid options");

    assert_eq!(result.tx_bytes.whole_bytes(), serialize(&tx).len() as u64);
    assert_eq!(result.tx_weight, tx.weight());
}

#[test]
fn p2sh_multisig_input_matches_serialized_input() {
    for (m, n) in [(1u32, 2usize), (2, 3), (3, 5)] {
        let redeem_script = multisig_redeem_script(i64::from(m), n);

        let mut builder = Builder::new().push_opcode(OP_0);
        for _ in 0..m {
            builder = builder.push_slice(push_bytes(72));
        }
        let script_sig = builder
            .push_slice(PushBytesBuf::try_from(redeem_script.to_bytes()).expect("push fits"))
            .into_script();

        let input = TxIn {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: Sequence::MAX,
            witness: Witness::new(),
        };

        let params = EstimationParams {
            input_script: ScriptType::P2sh,
            input_m: m,
            input_n: n as u32,
            ..Default::default()
        };
        let estimate = input_size(&params).expect("valid multisig");

        assert_eq!(
            estimate.input_size.whole_bytes(),
            serialize(&input).len() as u64,
            "{}-of-{} P2SH input",
            m,
            n
        );
    }
}
