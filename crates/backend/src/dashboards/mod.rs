pub mod d400_stock_summary;
