//! The diagnostic code catalog.
//!
//! # Taxonomy & Governance
//!
//! Numbers are grouped by hundreds band (see [`ranges`]). They are a wire
//! contract with the host application and the display firmware: a number,
//! once assigned, is never reused or renumbered. Gaps (303-306, 600,
//! 717-729, ...) are left unassigned on purpose.
//!
//! # Severity Policy
//!
//! - **INFO**: status and command acknowledgements
//! - **WARNING**: the machine keeps running, the operator should look
//! - **ERROR**: a requested action was refused or failed
//! - **FATAL**: motion has been or must be stopped
//!
//! Severity is assigned per code, not per band. Numbers outside the catalog
//! are reported as ERROR (see [`crate::severity_of`]).

use crate::define_error_codes;

/// Band limits per category. Checked against the table in `tests`.
pub mod ranges {
    pub const SUCCESS: u16 = 0;
    pub const SYSTEM_START:        u16 = 100; pub const SYSTEM_END:        u16 = 199;
    pub const COMMUNICATION_START: u16 = 200; pub const COMMUNICATION_END: u16 = 299;
    pub const MOTOR_START:         u16 = 300; pub const MOTOR_END:         u16 = 399;
    pub const SENSOR_START:        u16 = 400; pub const SENSOR_END:        u16 = 499;
    pub const USER_INPUT_START:    u16 = 500; pub const USER_INPUT_END:    u16 = 599;
    pub const INFORMATIONAL_START: u16 = 600; pub const INFORMATIONAL_END: u16 = 699;
    pub const COMMAND_START:       u16 = 700; pub const COMMAND_END:       u16 = 799;
    pub const MEMORY_START:        u16 = 800; pub const MEMORY_END:        u16 = 899;
    pub const SAFETY_START:        u16 = 900; pub const SAFETY_END:        u16 = 999;
}

define_error_codes! {
    // -------------------------------------------------------------------------
    // 0 - Success
    // -------------------------------------------------------------------------
    Success => {
        /// No error.
        NoError = (0, Info, "No Error"),
    }

    // -------------------------------------------------------------------------
    // 100-199 - System
    // -------------------------------------------------------------------------
    System => {
        /// Overheat detected.
        SystemOverheat      = (100, Fatal, "System Overheat"),
        /// Power supply too low.
        SystemUndervoltage  = (101, Warning, "Undervoltage"),
        /// Power supply too high.
        SystemOvervoltage   = (102, Error, "Overvoltage"),
        /// FRAM/EEPROM hardware failure.
        SystemMemoryFailure = (110, Fatal, "Memory Failure"),
    }

    // -------------------------------------------------------------------------
    // 200-299 - Communication
    // -------------------------------------------------------------------------
    Communication => {
        /// Serial/I2C/SPI failure.
        CommunicationFail   = (200, Error, "Comm Fail"),
        /// Communication timeout.
        CommTimeout         = (201, Error, "Comm Timeout"),
        /// Unexpected data received.
        CommInvalidResponse = (202, Error, "Invalid Response"),
        /// USB host went away; outputs were put in a safe state.
        UsbDisconnected     = (203, Error, "USB Disconnected"),
        /// Command not understood.
        InvalidCommand      = (204, Error, "Invalid command"),
    }

    // -------------------------------------------------------------------------
    // 300-399 - Motor Control
    // -------------------------------------------------------------------------
    // ACTION: FATAL codes here mean the axis has been stopped.
    Motor => {
        /// Motion refused because the motor is already running.
        MotorRunning                = (300, Error, "Motor running"),
        /// Overcurrent detected.
        MotorOvercurrent            = (301, Fatal, "Motor Overcurrent"),
        /// Speed exceeds limit.
        MotorOverspeed              = (302, Error, "Motor Overspeed"),
        /// Calibration finished.
        MotorCalibrationPass        = (307, Info, "Calibration Successful"),
        /// Calibration failed.
        MotorCalibrationFail        = (308, Error, "Calibration Failed"),
        /// Action refused: motors not calibrated.
        MotorNotCalibrated          = (309, Error, "Motors not calibrated"),
        /// Operation not allowed during calibration.
        MotorCalibrationActive      = (310, Warning, "Calibration Active"),
        /// Operation requires an active calibration.
        MotorCalibrationNotActive   = (311, Warning, "Calibration not active"),
        /// Calibration run started.
        MotorCalibrationStarted     = (312, Info, "Calibration Started"),
        /// Driver alarm is preventing movement.
        MotorAlarmTriggered         = (313, Fatal, "Alarm Triggered"),
        /// Movement blocked during motor startup.
        MotorStartupDelay           = (314, Fatal, "Motor Startup Delay"),
        /// Movement stopped by an endstop.
        MotorEndstopTriggered       = (315, Fatal, "Endstop Triggered"),
        /// Endstops are not enabled.
        MotorEndstopDisabled        = (316, Error, "Endstops disabled"),
        /// Movement exceeds the configured distance limit.
        MotorDistanceLimitExceeded  = (317, Error, "Machine distance limit exceeded"),
        /// AUX1 endstop triggered during movement.
        MotorAux1EndstopTriggered   = (318, Fatal, "AUX1 Endstop Triggered"),
        /// AUX2 endstop triggered during movement.
        MotorAux2EndstopTriggered   = (319, Fatal, "AUX2 Endstop Triggered"),
        /// General movement error (e.g. blocked by service mode).
        MotorMovementError          = (320, Fatal, "Motor Movement Error"),
        /// Movement attempted while the safety return is engaged.
        MotorSafetyTriggered        = (321, Error, "Motor safety return triggered"),
        /// Safety return could not back the axis off.
        MotorSafetyError            = (322, Error, "Safety return error: can not backup"),
        /// Service mode is on; endstops cannot be enabled.
        ServiceModeActive           = (323, Error, "Service mode enabled"),
        /// Motors stopped.
        MotorStopped                = (324, Info, "Motors stopped"),
        /// Motion watchdog expired and triggered an emergency stop.
        MotorWatchdogExpired        = (325, Error, "Motor Watchdog Expired"),
    }

    // -------------------------------------------------------------------------
    // 400-499 - Sensors
    // -------------------------------------------------------------------------
    Sensor => {
        /// Sensor not responding.
        SensorFailure        = (400, Error, "Sensor Fail"),
        /// Reading exceeds the expected range.
        SensorOutOfRange     = (401, Error, "Sensor OOR"),
        /// Machine-wide overload.
        MachineOverload      = (402, Error, "Machine Overload"),
        /// Single load cell overload.
        LoadcellOverload     = (403, Error, "Loadcell Overload"),
        /// Expected sensor (load cell) is absent.
        SensorNotPresent     = (404, Error, "Loadcell not present"),
        /// Load cell became present.
        LoadcellConnected    = (405, Info, "Loadcell connected"),
        /// Load cell became absent.
        LoadcellDisconnected = (406, Info, "Loadcell disconnected"),
    }

    // -------------------------------------------------------------------------
    // 500-599 - User Input
    // -------------------------------------------------------------------------
    UserInput => {
        /// Invalid input.
        InvalidParam = (500, Error, "Invalid Param"),
        /// Parameter outside its allowed range.
        OutOfRange   = (501, Error, "Out of Range"),
        /// Pins not properly configured.
        InvalidPin   = (502, Error, "Invalid Pin Configuration"),
    }

    // -------------------------------------------------------------------------
    // 600-699 - Informational (600 unassigned)
    // -------------------------------------------------------------------------
    Informational => {
        /// Function is disabled.
        FunctionDisabled      = (601, Info, "Function Disabled"),
        /// Same action requested twice without a toggle in between.
        RepeatedActionRequest = (602, Info, "Repeated action request"),
        /// DSLR photo taken.
        DslrPhotoTriggered    = (603, Info, "DSLR Photo Triggered"),
        /// DSLR focus triggered.
        DslrFocusTriggered    = (604, Info, "DSLR Focus Triggered"),
    }

    // -------------------------------------------------------------------------
    // 700-799 - Commands received from the display MCU
    // -------------------------------------------------------------------------
    // Reported to the host PC as acknowledgements. 712-716 report execution
    // failures of an accepted command.
    Command => {
        /// Speed command received.
        McuCommandReceivedSpeed            = (700, Info, "MCU: Speed Command"),
        /// Acceleration command received.
        McuCommandReceivedAccel            = (701, Info, "MCU: Acceleration Command"),
        /// Move-to-position command received.
        McuCommandReceivedPosition         = (702, Info, "MCU: Move to Position"),
        /// Calibration toggle received.
        McuCommandReceivedCalibration      = (703, Info, "MCU: Calibration Toggle"),
        /// Stop command received.
        McuCommandReceivedStop             = (704, Info, "MCU: Stop All"),
        /// Experiment parameters received.
        McuCommandReceivedExperiment       = (705, Info, "MCU: Experiment Params"),
        /// Screen update command received.
        McuCommandReceivedScreen           = (706, Info, "MCU: Screen Command"),
        /// Motor enable toggle received.
        McuCommandReceivedMotorEnable      = (707, Info, "MCU: Toggle Motor Enable"),
        /// Move down / run forward received.
        McuCommandReceivedMoveDown         = (708, Info, "MCU: Move Down"),
        /// Move up / run backward received.
        McuCommandReceivedMoveUp           = (709, Info, "MCU: Move Up"),
        /// Startup report requested.
        McuCommandReceivedStartup          = (710, Info, "MCU: Startup Report"),
        /// Load cell tare/reset received.
        McuCommandReceivedLoadcell         = (711, Info, "MCU: Load Cell Action"),
        /// Move down could not be executed.
        McuCommandExecutionFailedMoveDown  = (712, Error, "MCU: Failed to Execute Move Down"),
        /// Move up could not be executed.
        McuCommandExecutionFailedMoveUp    = (713, Error, "MCU: Failed to Execute Move Up"),
        /// Move to position could not be executed.
        McuCommandExecutionFailedMoveToPos = (714, Error, "MCU: Failed to Execute Move to Position"),
        /// Calibration toggle could not be executed.
        McuCommandExecutionFailedCalib     = (715, Error, "MCU: Calibration Toggle Failed"),
        /// Stop could not be executed.
        McuCommandExecutionFailedStop      = (716, Error, "MCU: Stop Command Failed"),
        /// Unrecognized command from the display.
        McuCommandReceivedInvalid          = (799, Info, "MCU: Invalid Command"),
    }

    // -------------------------------------------------------------------------
    // 800-899 - Memory
    // -------------------------------------------------------------------------
    // MemoryDisabled predates the band and keeps its 730 number.
    Memory => {
        /// FRAM disabled; configuration cannot be persisted.
        MemoryDisabled = (730, Error, "Memory failed: FRAM disabled"),
        /// Configuration saved.
        MemorySave     = (800, Info, "Memory save successful"),
        /// Configuration loaded.
        MemoryLoad     = (801, Info, "Memory load successful"),
        /// Configuration reset to defaults.
        MemoryReset    = (802, Info, "Memory reset successful"),
    }

    // -------------------------------------------------------------------------
    // 900-999 - Safety
    // -------------------------------------------------------------------------
    // ESCALATION: Immediate shutdown.
    Safety => {
        /// Immediate shutdown required.
        EmergencyStop         = (900, Fatal, "Emergency Stop"),
        /// Hardware safety limits exceeded.
        HardwareLimitExceeded = (901, Fatal, "Hardware Limit"),
    }
}
