use super::*;
use shared::error::ErrorKind;

const VALID_UFRAG: &str = "E2Fr";
const VALID_PWD: &str = "OpQzg1PAwUdeOB244chlgd";

#[test]
fn test_parse_legacy_empty_credentials() -> Result<()> {
    let params = IceParameters::parse("", "")?;
    assert_eq!(params, IceParameters::default());
    assert!(params.ufrag.is_empty());
    assert!(params.pwd.is_empty());
    assert!(params.is_empty());
    assert!(!params.renomination);

    Ok(())
}

#[test]
fn test_parse_valid_credentials_verbatim() -> Result<()> {
    let tests = vec![
        (VALID_UFRAG, VALID_PWD),
        ("abcd", "abcdefghijklmnopqrstuv"),
        ("a+/Z", "ZZZZ++++////0000999999"),
        (
            "asd88fgpdd777uzjYhagZg",
            "PM1B+aN0qKMy7zmbSnoqyQNOb9gHJd9jRvn1wfIeFMd",
        ),
    ];

    for (ufrag, pwd) in tests {
        let params = IceParameters::parse(ufrag, pwd)?;
        assert_eq!(params.ufrag, ufrag);
        assert_eq!(params.pwd, pwd);
        assert!(!params.is_empty());
    }

    Ok(())
}

#[test]
fn test_parse_length_bounds_inclusive() -> Result<()> {
    let min_ufrag = "u".repeat(ICE_UFRAG_MIN_LENGTH);
    let max_ufrag = "u".repeat(ICE_UFRAG_MAX_LENGTH);
    let min_pwd = "p".repeat(ICE_PWD_MIN_LENGTH);
    let max_pwd = "p".repeat(ICE_PWD_MAX_LENGTH);

    IceParameters::parse(&min_ufrag, &min_pwd)?;
    IceParameters::parse(&max_ufrag, &max_pwd)?;

    Ok(())
}

#[test]
fn test_parse_ufrag_length_violation() {
    let tests = vec![
        "".to_owned(),
        "a".to_owned(),
        "u".repeat(ICE_UFRAG_MIN_LENGTH - 1),
        "u".repeat(ICE_UFRAG_MAX_LENGTH + 1),
    ];

    for ufrag in tests {
        let err = IceParameters::parse(&ufrag, VALID_PWD).unwrap_err();
        assert_eq!(
            err,
            Error::ErrIceUfragLength {
                min: ICE_UFRAG_MIN_LENGTH,
                max: ICE_UFRAG_MAX_LENGTH,
            },
            "ufrag of length {}",
            ufrag.len()
        );
        assert_eq!(err.kind(), ErrorKind::SyntaxError);
    }
}

#[test]
fn test_parse_pwd_length_violation() {
    let tests = vec![
        "".to_owned(),
        "p".repeat(ICE_PWD_MIN_LENGTH - 1),
        "p".repeat(ICE_PWD_MAX_LENGTH + 1),
    ];

    for pwd in tests {
        let err = IceParameters::parse(VALID_UFRAG, &pwd).unwrap_err();
        assert_eq!(
            err,
            Error::ErrIcePwdLength {
                min: ICE_PWD_MIN_LENGTH,
                max: ICE_PWD_MAX_LENGTH,
            },
            "pwd of length {}",
            pwd.len()
        );
        assert_eq!(err.kind(), ErrorKind::SyntaxError);
    }
}

#[test]
fn test_parse_pwd_too_short_message() {
    let err = IceParameters::parse("ufrag1234", "password1234567890").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert_eq!(
        err.to_string(),
        "ICE pwd must be between 22 and 256 characters long."
    );
}

#[test]
fn test_parse_invalid_charset() {
    let bad_chars = [' ', '=', '#', '-', '_', '.', ':', 'é'];

    for c in bad_chars {
        let ufrag = format!("abc{c}");
        let err = IceParameters::parse(&ufrag, VALID_PWD).unwrap_err();
        assert_eq!(err, Error::ErrIceUfragCharset, "ufrag {ufrag:?}");
        assert_eq!(err.kind(), ErrorKind::SyntaxError);

        let pwd = format!("{}{c}", &VALID_PWD[1..]);
        let err = IceParameters::parse(VALID_UFRAG, &pwd).unwrap_err();
        assert_eq!(err, Error::ErrIcePwdCharset, "pwd {pwd:?}");
        assert_eq!(err.kind(), ErrorKind::SyntaxError);
    }
}

#[test]
fn test_parse_charset_message() {
    let err = IceParameters::parse("bad ufrag", VALID_PWD).unwrap_err();
    assert_eq!(
        err.to_string(),
        "ICE ufrag must contain only alphanumeric characters, '+', and '/'."
    );
}

#[test]
fn test_parse_length_counts_bytes() {
    // 3 chars, 6 bytes: long enough, so the charset rule reports
    let err = IceParameters::parse("ééé", VALID_PWD).unwrap_err();
    assert_eq!(err, Error::ErrIceUfragCharset);

    // 200 chars, 400 bytes: too long
    let err = IceParameters::parse(&"é".repeat(200), VALID_PWD).unwrap_err();
    assert_eq!(
        err,
        Error::ErrIceUfragLength {
            min: ICE_UFRAG_MIN_LENGTH,
            max: ICE_UFRAG_MAX_LENGTH,
        }
    );

    // 11 chars, 22 bytes
    let err = IceParameters::parse(VALID_UFRAG, &"é".repeat(11)).unwrap_err();
    assert_eq!(err, Error::ErrIcePwdCharset);

    let err = IceParameters::parse(VALID_UFRAG, &"é".repeat(129)).unwrap_err();
    assert!(matches!(err, Error::ErrIcePwdLength { .. }));
}

#[test]
fn test_deserialize_validates() {
    let tests = vec![
        (r#"{"ufrag":"a","pwd":""}"#, false),
        (r#"{"ufrag":"a","pwd":"","renomination":false}"#, false),
        (r#"{"ufrag":"E2Fr","pwd":"short"}"#, false),
        (r#"{"ufrag":"E2F=","pwd":"OpQzg1PAwUdeOB244chlgd"}"#, false),
        (r#"{"ufrag":"","pwd":""}"#, true),
        (r#"{}"#, true),
        (r#"{"ufrag":"E2Fr","pwd":"OpQzg1PAwUdeOB244chlgd"}"#, true),
    ];

    for (json, expected_ok) in tests {
        let result = serde_json::from_str::<IceParameters>(json);
        assert_eq!(result.is_ok(), expected_ok, "{json}: {result:?}");
    }
}

#[test]
fn test_serde_round_trip_keeps_renomination() -> Result<()> {
    let mut params = IceParameters::parse(VALID_UFRAG, VALID_PWD)?;
    params.renomination = true;

    let json = serde_json::to_string(&params).expect("serialize");
    let decoded: IceParameters = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, params);

    Ok(())
}

#[test]
fn test_parse_ufrag_checked_before_pwd() {
    // both invalid: only the ufrag error is reported
    let err = IceParameters::parse("a", "short").unwrap_err();
    assert_eq!(
        err,
        Error::ErrIceUfragLength {
            min: ICE_UFRAG_MIN_LENGTH,
            max: ICE_UFRAG_MAX_LENGTH,
        }
    );

    let err = IceParameters::parse("ab#d", "short").unwrap_err();
    assert_eq!(err, Error::ErrIceUfragCharset);
}

#[test]
fn test_parse_one_side_empty_is_rejected() {
    let err = IceParameters::parse(VALID_UFRAG, "").unwrap_err();
    assert!(matches!(err, Error::ErrIcePwdLength { .. }));

    let err = IceParameters::parse("", VALID_PWD).unwrap_err();
    assert!(matches!(err, Error::ErrIceUfragLength { .. }));
}

#[test]
fn test_generate_passes_validation() -> Result<()> {
    for _ in 0..10 {
        let generated = IceParameters::generate();
        let parsed = IceParameters::parse(&generated.ufrag, &generated.pwd)?;
        assert_eq!(parsed, generated);
    }

    Ok(())
}

#[test]
fn test_is_ice_char() {
    let tests = vec![
        ('a', true),
        ('Z', true),
        ('0', true),
        ('+', true),
        ('/', true),
        (' ', false),
        ('=', false),
        ('#', false),
        ('\u{00e9}', false),
    ];

    for (c, expected) in tests {
        assert_eq!(is_ice_char(c), expected, "{c:?}");
    }
}
