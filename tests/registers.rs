use bilge::prelude::*;
use cmdreg::{
    Error,
    interface::{status, error, command},
    registers::*,
};


#[test]
fn command_layout() {
    // execute, TAKE_PICTURE, parameter 5
    let register = decode_command(&[0x88, 0x00, 0x00, 0x05]).unwrap();
    assert!(register.execute());
    assert_eq!(register.command(), command::TAKE_PICTURE);
    assert_eq!(register.parameter().value(), 5);

    let register = decode_command(&[0x7f, 0xff, 0xff, 0xff]).unwrap();
    assert!(!register.execute());
    assert_eq!(register.command(), 0xff);
    assert_eq!(register.parameter(), <u23 as Number>::MAX);

    let register = CommandRegister::new(u23::new(0x12_3456), command::PING, true);
    assert_eq!(encode_command(register), [0x81, 0x12, 0x34, 0x56]);
}

#[test]
fn status_layout() {
    assert_eq!(encode_status(StatusRegister::ready()), [0x80, 0x00, 0x00, 0x03]);
    assert_eq!(encode_status(StatusRegister::pending()), [0xc0, 0x00, 0x00, 0x04]);
    assert_eq!(encode_status(StatusRegister::internal_error()), [0x81, 0x80, 0x00, 0x05]);

    let register = decode_status(&[0x42, 0xff, 0xff, 0xff]).unwrap();
    assert!(!register.operational());
    assert!(register.busy());
    assert_eq!(register.error(), 0x0b);
    assert_eq!(register.additional_status(), <u22 as Number>::MAX);

    let register = StatusRegister::reply(error::NO_CAMERA, u22::new(status::ERROR));
    assert!(register.operational());
    assert!(!register.busy());
    assert_eq!(register.raw(), (1 << 31) | (5 << 22) | 5);
}

#[test]
fn round_trip() {
    let patterns = (0 ..= u32::MAX).step_by(0x1_0001)
        .chain([0, 1, 0x7f_ffff, 0x80_0000, 0x8000_0000, 0xc000_0000, 0x3f_ffff, u32::MAX]);
    for raw in patterns {
        let bytes = raw.to_be_bytes();
        let command = decode_command(&bytes).unwrap();
        assert_eq!(command.raw(), raw);
        assert_eq!(encode_command(command), bytes);
        assert_eq!(decode_command(&encode_command(command)).unwrap(), command);

        let status = decode_status(&bytes).unwrap();
        assert_eq!(status.raw(), raw);
        assert_eq!(encode_status(status), bytes);
        assert_eq!(decode_status(&encode_status(status)).unwrap(), status);
    }
}

#[test]
fn invalid_length() {
    assert_eq!(decode_command(&[]), Err(Error::InvalidLength));
    assert_eq!(decode_command(&[0x80, 0, 0]), Err(Error::InvalidLength));
    assert_eq!(decode_status(&[0x80, 0, 0, 3, 0]), Err(Error::InvalidLength));
}
