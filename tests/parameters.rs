mod common;

use cmdreg::{
    Error,
    interface::{COMMAND_SUBMODULE, SIGNAL_SUBMODULE, index},
    parameters::*,
};


#[test]
fn defaults() {
    let store = ParameterStore::default();
    assert_eq!(store.read(COMMAND_SUBMODULE, index::PARAMETER_1, 4), Ok(&[0u8; 4][..]));
    assert_eq!(store.read(COMMAND_SUBMODULE, index::PARAMETER_2, 4), Ok(&[0u8; 4][..]));
    assert_eq!(store.read(SIGNAL_SUBMODULE, index::GAIN, 4), Ok(&[0u8, 0, 0, 1][..]));
    assert_eq!(store.descriptor(SIGNAL_SUBMODULE, index::GAIN).unwrap().name, "Echo gain setting");
}

#[test]
fn write_then_read() {
    common::init_logger();
    let mut store = ParameterStore::default();
    store.write(COMMAND_SUBMODULE, index::PARAMETER_1, &[0xde, 0xad, 0xbe, 0xef]).unwrap();
    store.write(COMMAND_SUBMODULE, index::PARAMETER_2, &[1, 2, 3, 4]).unwrap();
    store.write(SIGNAL_SUBMODULE, index::GAIN, &[0, 0, 0, 2]).unwrap();

    // stored as delivered, no byte order interpretation
    assert_eq!(store.read(COMMAND_SUBMODULE, index::PARAMETER_1, 4).unwrap(), &[0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(store.read(COMMAND_SUBMODULE, index::PARAMETER_2, 16).unwrap(), &[1, 2, 3, 4]);
    assert_eq!(store.read(SIGNAL_SUBMODULE, index::GAIN, 4).unwrap(), &[0, 0, 0, 2]);

    // last write wins
    store.write(COMMAND_SUBMODULE, index::PARAMETER_1, &[5, 6, 7, 8]).unwrap();
    assert_eq!(store.read(COMMAND_SUBMODULE, index::PARAMETER_1, 4).unwrap(), &[5, 6, 7, 8]);
}

#[test]
fn length_mismatch_keeps_value() {
    common::init_logger();
    let mut store = ParameterStore::default();
    store.write(COMMAND_SUBMODULE, index::PARAMETER_1, &[9, 9, 9, 9]).unwrap();
    let cases: [&[u8]; 4] = [&[], &[1], &[1, 2, 3], &[1, 2, 3, 4, 5]];
    for data in cases {
        assert_eq!(store.write(COMMAND_SUBMODULE, index::PARAMETER_1, data), Err(Error::LengthMismatch));
        assert_eq!(store.read(COMMAND_SUBMODULE, index::PARAMETER_1, 4).unwrap(), &[9, 9, 9, 9]);
    }
}

#[test]
fn unknown_parameter() {
    common::init_logger();
    let mut store = ParameterStore::default();
    // parameter exists, but not on this submodule
    assert_eq!(store.write(SIGNAL_SUBMODULE, index::PARAMETER_1, &[0; 4]), Err(Error::UnknownParameter));
    assert_eq!(store.write(0x1234, 1, &[0; 4]), Err(Error::UnknownParameter));
    assert_eq!(store.read(COMMAND_SUBMODULE, index::GAIN, 4), Err(Error::UnknownParameter));
}

#[test]
fn buffer_too_small() {
    common::init_logger();
    let store = ParameterStore::default();
    assert_eq!(store.read(SIGNAL_SUBMODULE, index::GAIN, 3), Err(Error::BufferTooSmall));
    assert_eq!(store.read(SIGNAL_SUBMODULE, index::GAIN, 0), Err(Error::BufferTooSmall));
}

static CUSTOM: [ParameterDescriptor; 1] = [
    ParameterDescriptor {
        submodule: 0x10,
        index: 1,
        length: 2,
        name: "custom",
        default: &[0xab, 0xcd],
    },
];

#[test]
fn custom_table() {
    let mut store = ParameterStore::new(&CUSTOM);
    assert_eq!(store.table().len(), 1);
    assert_eq!(store.read(0x10, 1, 2).unwrap(), &[0xab, 0xcd]);
    assert_eq!(store.write(0x10, 1, &[0; 4]), Err(Error::LengthMismatch));
    store.write(0x10, 1, &[1, 2]).unwrap();
    assert_eq!(store.value(0x10, 1), Some(&[1u8, 2][..]));
}
