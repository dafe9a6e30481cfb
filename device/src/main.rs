//! cycle simulator: plays the controller and the cyclic transport around a device

use std::{
    path::PathBuf,
    time::Duration,
    };
use bilge::prelude::*;
use clap::Parser;
use log::*;

use cmdreg::{
    interface::{COMMAND_SUBMODULE, SIGNAL_SUBMODULE, command},
    processor::{CommandProcessor, ScriptProcessor, ScriptConfig},
    signal::SignalData,
    controller::Controller,
    device::Device,
    terminate,
    };
use device_suite::workpiece;


#[derive(Parser, Debug)]
#[command(about = "exchange command and status registers with a simulated device")]
struct Args {
    /// cycle period in milliseconds
    #[arg(long, default_value_t = 100)]
    cycle_ms: u64,
    /// number of cycles to run
    #[arg(long, default_value_t = 60)]
    cycles: u32,
    /// number of cycles the execute bit is held for each command
    #[arg(long, default_value_t = 2)]
    hold: u8,
    /// program answering commands, the demo camera is used if not set
    #[arg(long)]
    script: Option<PathBuf>,
    /// arguments passed to the script
    #[arg(last = true)]
    script_args: Vec<String>,
}

/// commands sent in loop
const PLAN: [u8; 6] = [
    command::PING,
    command::SET_WORKPIECE_TYPE_122,
    command::TAKE_PICTURE,
    command::TAKE_PICTURE,
    command::REBOOT,
    command::TAKE_PICTURE,
    ];

const SUBSLOT: u16 = 1;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    match args.script.clone() {
        Some(program) => {
            let config = args.script_args.iter()
                .fold(ScriptConfig::new(program), |config, arg| config.arg(arg));
            run(Device::start(ScriptProcessor::new(config)).unwrap_or_else(|err| terminate(err)), &args).await
        },
        None => run(Device::start(workpiece::camera()).unwrap_or_else(|err| terminate(err)), &args).await,
    }
}

async fn run<P: CommandProcessor>(mut device: Device<P>, args: &Args) {
    let mut controller = Controller::new(args.hold);
    let mut interval = tokio::time::interval(Duration::from_millis(args.cycle_ms));
    let mut plan = PLAN.iter().cycle();
    let mut last = None;

    info!("running {} cycles", args.cycles);
    for cycle in 0 .. args.cycles {
        interval.tick().await;

        // controller side outputs
        if controller.is_idle() {
            if let Some(&code) = plan.next() {
                debug!("submitting command {:#04x}", code);
                controller.submit(code, u23::new(cycle & 0xff));
            }
        }
        if let Err(err) = device.consume_output(COMMAND_SUBMODULE, SUBSLOT, &controller.output()) {
            if err.is_fatal()
                {terminate(err)}
            warn!("command output refused: {}", err);
        }
        let signal = SignalData::new(cycle, cycle as f32 * 0.5);
        if let Err(err) = device.consume_output(SIGNAL_SUBMODULE, SUBSLOT, &signal.to_wire()) {
            warn!("signal output refused: {}", err);
        }

        // controller side inputs
        if let Some((data, _)) = device.produce_input(COMMAND_SUBMODULE, SUBSLOT) {
            match controller.observe(data) {
                Ok(status) => if last != Some(status) {
                    info!("cycle {}  status {:?}", cycle, status);
                    last = Some(status);
                },
                Err(err) => warn!("bad status register: {}", err),
            }
        }
        if let Some((data, _)) = device.produce_input(SIGNAL_SUBMODULE, SUBSLOT) {
            if let Ok(echo) = SignalData::from_wire(data) {
                debug!("cycle {}  signal echo {} {}", cycle, echo.integer, echo.float());
            }
        }
    }
    info!("done");
}
