use crate::board::Rules;

// Apply/undo perft; exercises the collaborator's stack discipline
pub fn perft<P: Rules>(pos: &mut P, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for mv in pos.legal_moves() {
        let mut child = pos.scoped(mv);
        nodes += perft(&mut *child, depth - 1);
    }
    nodes
}
