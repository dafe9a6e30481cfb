use bilge::prelude::*;
use rand::Rng;
use log::*;
use cmdreg::{
    interface::{command, status, error},
    processor::{HandlerTable, Reply},
    };


/// article type prefix selected by [command::SET_WORKPIECE_TYPE_122]
pub const TYPE_122: u32 = 122;

/// state of the inspection between commands
#[derive(Clone, Debug, Default)]
pub struct Inspection {
    /// workpiece type prefix, 0 if none
    pub kind: u32,
    /// number of pictures taken since initialization
    pub pictures: u32,
}

/// handler table answering the workpiece commands
pub type Camera = HandlerTable<Inspection, 8>;

pub fn camera() -> Camera {
    let mut table = Camera::new();
    // the table has room for all of them
    table.register(command::SET_WORKPIECE_TYPE_NONE, set_type_none).ok();
    table.register(command::SET_WORKPIECE_TYPE_122, set_type_122).ok();
    table.register(command::TAKE_PICTURE, take_picture).ok();
    table
}

fn set_type_none(inspection: &mut Inspection, _: u23) -> Reply {
    inspection.kind = 0;
    Reply::new(error::UNDEFINED, status::READY)
}
fn set_type_122(inspection: &mut Inspection, _: u23) -> Reply {
    inspection.kind = TYPE_122;
    Reply::new(error::UNDEFINED, status::READY)
}
/// simulated picture: no camera one time in 10, and one workpiece out of 3 passes
fn take_picture(inspection: &mut Inspection, _: u23) -> Reply {
    let mut rng = rand::rng();
    inspection.pictures += 1;
    debug!("taking picture {} of workpiece type {}", inspection.pictures, inspection.kind);
    if rng.random_range(1 ..= 10) == 1 {
        debug!("no camera present");
        return Reply::new(error::NO_CAMERA, status::ERROR);
    }
    if rng.random_range(1 ..= 3) == 1 
        {Reply::new(error::UNDEFINED, status::WORKPIECE_OK)}
    else 
        {Reply::new(error::UNDEFINED, status::WORKPIECE_NOK)}
}
