/// demo command backend modelling a workpiece inspection camera
pub mod workpiece;
