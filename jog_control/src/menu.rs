//! Operator command menu.
//!
//! Static help text printed once at startup, before raw mode is
//! acquired. Plain stdout because this is operator UI, not diagnostics.
//! The pin chart shows the nominal per-axis patterns; see
//! [`jog_common::motion::JogDirection::pattern`] for the installed
//! Y-axis wiring.

/// Key/axis/pattern chart shown to the operator.
pub const COMMAND_MENU: &str = "
\tMENU OF COMMANDS
\t================
 r  drive RIGHT-X     x-axis (3,2    CW)  pins = (1/0)(1) (0)(0) (0)(0)
 l  drive LEFT-X      x-axis (1,0   CCW)  pins =   (1)(0) (0)(0) (0)(0)
 f  drive FORWARD-Y   y-axis (12,8   CW)  pins = (0)(0) (1/0)(1) (0)(0)
 b  drive BACKWARD-Y  y-axis (4,0   CCW)  pins = (0)(0)   (1)(0) (0)(0)
 u  drive UP-Z        z-axis (16,0   CW)  pins = (0)(0) (0)(0)   (1)(0)
 d  drive DOWN-Z      z-axis (48,32 CCW)  pins = (0)(0) (0)(0) (1/0)(1)
 q  quit and exit

Enter a command (wait for 'jog complete' after each keypress).
";

/// Print the menu to stdout.
pub fn print_menu() {
    println!("{COMMAND_MENU}");
}
