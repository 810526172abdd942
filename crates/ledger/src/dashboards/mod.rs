pub mod d400_rep_summary;
