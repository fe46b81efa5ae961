use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
    ShipKind::Submarine,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

pub const PLAYER1_NAME: &str = "Player1";
pub const PLAYER2_NAME: &str = "Player2";

/// Environment variable read by `init_logging` for the log level.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";
