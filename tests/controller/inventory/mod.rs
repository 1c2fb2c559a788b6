mod generate_inventory_number;

use super::*;
