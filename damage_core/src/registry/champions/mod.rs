//! Per-champion ability damage formulas
//!
//! One registration block per champion, damaging abilities only.
//! Champion keys use the game's internal identifiers (no spaces or
//! punctuation: `MonkeyKing`, `JarvanIV`, `DrMundo`, ...), matching
//! what the game-state layer reports.
//!
//! Per-rank arrays are 0-indexed; stage 0 is always the primary damage
//! instance, higher stages cover detonations, returns, and ticks.

mod a_to_c;
mod d_to_g;
mod h_to_k;
mod l_to_n;
mod o_to_r;
mod s_to_t;
mod u_to_z;

use super::ChampionTable;

pub(super) fn register_all(table: &mut ChampionTable) {
    a_to_c::register(table);
    d_to_g::register(table);
    h_to_k::register(table);
    l_to_n::register(table);
    o_to_r::register(table);
    s_to_t::register(table);
    u_to_z::register(table);
}
