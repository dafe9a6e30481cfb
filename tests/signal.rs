use cmdreg::{
    Error,
    interface::{SIGNAL_SUBMODULE, index},
    parameters::ParameterStore,
    signal::*,
};


fn with_gain(gain: [u8; 4]) -> ParameterStore {
    let mut store = ParameterStore::default();
    store.write(SIGNAL_SUBMODULE, index::GAIN, &gain).unwrap();
    store
}

#[test]
fn integer_scaled() {
    let store = with_gain([0, 0, 0, 2]);
    let mut channel = SignalChannel::new();
    channel.set_output(&SignalData::new(3, 0.).to_wire()).unwrap();
    let input = SignalData::from_wire(channel.compute_input(&store).unwrap()).unwrap();
    assert_eq!(input.integer, 6);
    assert_eq!(&channel.compute_input(&store).unwrap()[.. 4], &[0, 0, 0, 6]);
}

#[test]
fn float_scaled() {
    let store = with_gain([0, 0, 0, 1]);
    let mut channel = SignalChannel::new();
    channel.set_output(&SignalData::new(0, 2.5).to_wire()).unwrap();
    let input = SignalData::from_wire(channel.compute_input(&store).unwrap()).unwrap();
    assert_eq!(input.float(), 2.5);

    // gain is an integer factor, not a ratio
    let store = with_gain([0, 0, 0, 4]);
    let input = SignalData::from_wire(channel.compute_input(&store).unwrap()).unwrap();
    assert_eq!(input.float(), 10.);
}

#[test]
fn wire_layout() {
    let data = SignalData::new(0x0102_0304, 1.0);
    assert_eq!(data.to_wire(), [0x01, 0x02, 0x03, 0x04, 0x3f, 0x80, 0x00, 0x00]);
}

#[test]
fn output_stored_verbatim() {
    let mut channel = SignalChannel::new();
    let raw = [1, 2, 3, 4, 5, 6, 7, 8];
    channel.set_output(&raw).unwrap();
    assert_eq!(channel.output(), &raw);
    assert_eq!(channel.set_output(&raw[.. 7]), Err(Error::InvalidLength));
    assert_eq!(channel.output(), &raw);
    channel.reset_output();
    assert_eq!(channel.output(), &[0; 8]);
}

#[test]
fn integer_wraps() {
    let store = with_gain([0, 0, 0, 2]);
    let mut channel = SignalChannel::new();
    channel.set_output(&SignalData::new(0x8000_0001, 0.).to_wire()).unwrap();
    let input = SignalData::from_wire(channel.compute_input(&store).unwrap()).unwrap();
    assert_eq!(input.integer, 2);
    assert_eq!(gain(&store), Ok(2));
}
