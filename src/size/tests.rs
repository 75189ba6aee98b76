//! Transaction size scenario tests

#[cfg(test)]
mod scenario_tests {
    use crate::error::ErrorCode;
    use crate::params::EstimationOptions;
    use crate::size::*;
    use crate::types::*;

    #[test]
    fn test_default_transaction() {
        let result = calc_tx_size_with(None).unwrap();

        assert_eq!(result.tx_vbytes.as_f64(), 10.0);
        assert_eq!(result.tx_bytes.as_f64(), 10.0);
        assert_eq!(result.tx_weight.to_wu(), 40);
    }

    #[test]
    fn test_legacy_outputs_only() {
        let options = EstimationOptions::new()
            .with_p2pkh_output_count(10)
            .with_p2tr_output_count(2);
        let result = calc_tx_size_with(Some(&options)).unwrap();

        assert_eq!(result.tx_bytes.as_f64(), 436.0);
        assert_eq!(result.tx_vbytes.as_f64(), 436.0);
        assert_eq!(result.tx_weight.to_wu(), 1744);
    }

    #[test]
    fn test_single_p2wpkh_payment() {
        // 1 P2WPKH in, 2 P2WPKH out
        let options = EstimationOptions::new()
            .with_input_count(1)
            .with_input_script(ScriptType::P2wpkh)
            .with_p2wpkh_output_count(2);
        let result = calc_tx_size_with(Some(&options)).unwrap();

        // overhead 10 + 0.75, input 67.75, outputs 62
        assert_eq!(result.tx_vbytes.as_f64(), 140.5);
        // extra raw 2.25, witness 107
        assert_eq!(result.tx_bytes.as_f64(), 140.5 + 2.25 + 107.0);
        assert_eq!(result.tx_weight.to_wu(), 562);
    }

    #[test]
    fn test_taproot_batch() {
        let options = EstimationOptions::new()
            .with_input_count(3)
            .with_input_script(ScriptType::P2tr)
            .with_p2tr_output_count(5);
        let result = calc_tx_size_with(Some(&options)).unwrap();

        let expected_vbytes = 10.75 + 3.0 * 57.25 + 5.0 * 43.0;
        assert_eq!(result.tx_vbytes.as_f64(), expected_vbytes);
        assert_eq!(result.tx_bytes.as_f64(), expected_vbytes + 2.25 + 3.0 * 65.0);
    }

    #[test]
    fn test_p2sh_multisig_spend() {
        let options = EstimationOptions::new()
            .with_input_count(2)
            .with_input_script(ScriptType::P2sh)
            .with_input_m(2)
            .with_input_n(3)
            .with_p2sh_output_count(1)
            .with_p2pkh_output_count(1);
        let result = calc_tx_size_with(Some(&options)).unwrap();

        // legacy: no witness discount, raw == virtual
        assert_eq!(result.tx_vbytes.as_f64(), 10.0 + 2.0 * 297.0 + 32.0 + 34.0);
        assert_eq!(result.tx_bytes, result.tx_vbytes);
    }

    #[test]
    fn test_weight_tracks_vbytes() {
        let options = EstimationOptions::new()
            .with_input_count(7)
            .with_input_script(ScriptType::P2shP2wsh)
            .with_input_m(2)
            .with_input_n(3)
            .with_p2wsh_output_count(3);
        let result = calc_tx_size_with(Some(&options)).unwrap();

        assert_eq!(result.tx_weight.to_wu() as f64, result.tx_vbytes.as_f64() * 4.0);
    }

    #[test]
    fn test_raw_size_additivity() {
        let params = EstimationParams {
            input_count: 4,
            input_script: ScriptType::P2wsh,
            input_m: 3,
            input_n: 5,
            p2wpkh_output_count: 2,
            ..Default::default()
        };
        let result = calc_tx_size(&params).unwrap();
        let breakdown = input_size(&params).unwrap();
        let extra = tx_overhead_extra_raw_bytes(params.input_script, 4).unwrap();

        let expected = extra.quarters()
            + result.tx_vbytes.quarters()
            + breakdown.input_witness_size.quarters() * 4;
        assert_eq!(result.tx_bytes.quarters(), expected);
    }

    #[test]
    fn test_threshold_above_key_count_rejected() {
        let params = EstimationParams {
            input_count: 1,
            input_script: ScriptType::P2wsh,
            input_m: 3,
            input_n: 2,
            ..Default::default()
        };
        let err = calc_tx_size(&params).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParameter);
    }

    #[test]
    fn test_huge_counts_overflow_cleanly() {
        let params = EstimationParams {
            input_count: u32::MAX,
            input_script: ScriptType::P2sh,
            input_m: 100_000_000,
            input_n: 120_000_000,
            ..Default::default()
        };
        let err = calc_tx_size(&params).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueTooLarge);
    }
}
