#[cfg(test)]
mod symbol_scenarios {
    use test_case::test_case;

    use semacode::*;

    #[test_case("A", 10, 10)]
    #[test_case("HELLO", 14, 14)]
    #[test_case("123456", 14, 14)]
    #[test_case("Hello, World!", 26, 12)]
    #[test_case("http://semacode.org/", 20, 20)]
    fn test_dimensions(data: &str, w: usize, h: usize) {
        let mut store = SymbolStore::new();
        store.encode(data).unwrap();
        assert_eq!((store.width(), store.height()), (Some(w), Some(h)));
        assert_eq!(store.len(), Some(w * h));

        let bits = store.bit_string().unwrap();
        let rows = bits.split_terminator(',').collect::<Vec<_>>();
        assert_eq!(rows.len(), h);
        for row in rows {
            assert_eq!(row.len(), w);
            assert!(row.chars().all(|c| c == '0' || c == '1'));
        }
        assert!(bits.ends_with(','));
    }

    #[test]
    fn test_empty_payload() {
        let mut store = SymbolStore::new();
        assert_eq!(store.encode(""), Err(SymbolError::InvalidInput));
        assert!(store.is_empty());

        store.encode("HELLO").unwrap();
        let before = store.bit_string();
        assert_eq!(store.encode(&[0u8; 0]), Err(SymbolError::InvalidInput));
        assert_eq!(store.bit_string(), before);
    }

    #[test]
    fn test_largest_symbol() {
        let mut store = SymbolStore::with_encoder(Ecc200::new().scheme(Scheme::Ascii));
        store.encode(&vec![b'x'; 1557]).unwrap();
        assert_eq!((store.width(), store.height()), (Some(144), Some(144)));
        assert_eq!(store.raw_encoded_length(), Some(1558));
        assert_eq!(store.symbol_capacity(), Some(1558));
        assert_eq!(store.ecc_bytes(), Some(620));

        let res = store.encode(&vec![b'x'; 1558]);
        assert_eq!(res, Err(SymbolError::EncodingFailed(EncodeFailure::DataTooLong)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_try_symbol() {
        let mut store = SymbolStore::new();
        assert_eq!(store.try_symbol().unwrap_err(), SymbolError::UseBeforeEncode);
        store.encode(b"\x00\x01\x02").unwrap();
        assert_eq!(store.try_symbol().unwrap().encoding().len(), 4);
    }

    #[test_case(Scheme::Ascii)]
    #[test_case(Scheme::C40)]
    #[test_case(Scheme::Text)]
    #[test_case(Scheme::Base256)]
    fn test_forced_scheme(scheme: Scheme) {
        let dm = DataMatrix::with_encoder(Ecc200::new().scheme(scheme), "Data Matrix 2024").unwrap();
        assert_eq!(dm.encoding().len(), 17);
        assert!(dm.symbol_capacity() >= dm.raw_encoded_length());

        let auto = DataMatrix::new("Data Matrix 2024").unwrap();
        assert!(auto.raw_encoded_length() <= dm.raw_encoded_length());
    }

    #[test]
    fn test_charset_payload() {
        let latin = DataMatrix::new(&Text::new("Grüße").charset(encoding_rs::WINDOWS_1252)).unwrap();
        let utf8 = DataMatrix::new(&Text::new("Grüße")).unwrap();
        assert_eq!(latin.encoding().len(), 6);
        assert_eq!(utf8.encoding().len(), 8);
    }
}

#[cfg(test)]
mod symbol_proptests {
    use prop::string::string_regex;
    use proptest::prelude::*;

    use semacode::*;

    pub fn payload_strategy() -> BoxedStrategy<Vec<u8>> {
        prop_oneof![
            prop::collection::vec(any::<u8>(), 1..300),
            string_regex("[0-9]{1,400}").unwrap().prop_map(String::into_bytes),
            string_regex("[A-Z0-9 ]{1,300}").unwrap().prop_map(String::into_bytes),
            string_regex("[a-z0-9 ]{1,300}").unwrap().prop_map(String::into_bytes),
        ]
        .boxed()
    }

    proptest! {
        #[test]
        fn proptest_views_consistent(data in payload_strategy()) {
            let mut store = SymbolStore::new();
            store.encode(&data).unwrap();
            let symbol = store.try_symbol().unwrap();
            let (w, h) = (symbol.width(), symbol.height());

            prop_assert!(SymbolSize::from_dimensions(w, h).is_some());
            prop_assert_eq!(symbol.len(), w * h);
            prop_assert!(symbol.symbol_capacity() >= symbol.raw_encoded_length());
            prop_assert_eq!(symbol.encoding().len(), data.len() + 1);

            let grid = store.grid().unwrap();
            let bits = store.bit_string().unwrap();
            prop_assert_eq!(grid.len(), h);
            prop_assert_eq!(bits.len(), (w + 1) * h);

            for (row, group) in grid.iter().zip(bits.split_terminator(',')) {
                prop_assert_eq!(row.len(), w);
                let expected = row.iter().map(|&b| if b { '1' } else { '0' }).collect::<String>();
                prop_assert_eq!(group, expected.as_str());
            }

            // Solid finder edges on the left and bottom of the symbol
            prop_assert!(grid[h - 1].iter().all(|&b| b));
            prop_assert!(grid.iter().all(|row| row[0]));
        }

        #[test]
        fn proptest_selection_monotonic(a in 1usize..=1558, b in 1usize..=1558) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo_size = SymbolSize::select(lo).unwrap();
            let hi_size = SymbolSize::select(hi).unwrap();
            prop_assert!(lo_size.data_capacity() <= hi_size.data_capacity());
            prop_assert!(lo_size.data_capacity() >= lo);
        }

        #[test]
        fn proptest_reencode(a in payload_strategy(), b in payload_strategy()) {
            let mut store = SymbolStore::new();
            store.encode(&a).unwrap();
            let first = store.grid().unwrap();

            store.encode(&b).unwrap();
            let mut fresh = SymbolStore::new();
            fresh.encode(&b).unwrap();
            prop_assert_eq!(store.symbol(), fresh.symbol());

            // Earlier views are snapshots
            let mut again = SymbolStore::new();
            again.encode(&a).unwrap();
            prop_assert_eq!(Some(first), again.grid());

            store.destroy();
            store.destroy();
            prop_assert!(store.is_empty());
        }
    }
}
