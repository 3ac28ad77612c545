use glam::Mat4;
use super::*;

fn asymmetric_matrix() -> Mat4 {
    Mat4::from_cols_array(&[
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, 12.0,
        13.0, 14.0, 15.0, 16.0,
    ])
}

// ============================================================================
// MatrixLayout
// ============================================================================

#[test]
fn test_column_major_raw_reads_columns() {
    let raw = [
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, 12.0,
        13.0, 14.0, 15.0, 16.0,
    ];

    let matrix = MatrixLayout::ColumnMajor.to_matrix(&raw);

    assert_eq!(matrix.x_axis.to_array(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(matrix.row(0).to_array(), [1.0, 5.0, 9.0, 13.0]);
}

#[test]
fn test_row_major_raw_reads_rows() {
    let raw = [
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, 12.0,
        13.0, 14.0, 15.0, 16.0,
    ];

    let matrix = MatrixLayout::RowMajor.to_matrix(&raw);

    assert_eq!(matrix.row(0).to_array(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(matrix.w_axis.to_array(), [4.0, 8.0, 12.0, 16.0]);
}

#[test]
fn test_layouts_are_transposes_of_each_other() {
    let raw = MatrixLayout::ColumnMajor.to_raw(&asymmetric_matrix());

    assert_eq!(
        MatrixLayout::RowMajor.to_matrix(&raw),
        MatrixLayout::ColumnMajor.to_matrix(&raw).transpose()
    );
}

#[test]
fn test_to_raw_inverts_to_matrix() {
    let matrix = asymmetric_matrix();

    for layout in [MatrixLayout::ColumnMajor, MatrixLayout::RowMajor] {
        assert_eq!(layout.to_matrix(&layout.to_raw(&matrix)), matrix, "{:?}", layout);
    }
}

// ============================================================================
// StaticProjection
// ============================================================================

#[test]
fn test_static_projection_default_layout() {
    let source = StaticProjection::from_matrix(asymmetric_matrix());

    assert_eq!(source.layout(), MatrixLayout::ColumnMajor);
    assert_eq!(source.raw_projection().unwrap(), asymmetric_matrix().to_cols_array());
    assert_eq!(source.matrix(), asymmetric_matrix());
}

#[test]
fn test_static_projection_row_major() {
    let raw = MatrixLayout::RowMajor.to_raw(&asymmetric_matrix());
    let source = StaticProjection::from_raw(raw, MatrixLayout::RowMajor);

    assert_eq!(source.layout(), MatrixLayout::RowMajor);
    assert_eq!(source.matrix(), asymmetric_matrix());
}

#[test]
fn test_static_projection_perspective_gl() {
    let source = StaticProjection::perspective_gl(1.2, 1.5, 0.5, 200.0);

    assert_eq!(source.matrix(), Mat4::perspective_rh_gl(1.2, 1.5, 0.5, 200.0));
}

#[test]
fn test_static_projection_orthographic_gl() {
    let source = StaticProjection::orthographic_gl(-4.0, 4.0, -3.0, 3.0, 0.1, 50.0);

    assert_eq!(source.matrix(), Mat4::orthographic_rh_gl(-4.0, 4.0, -3.0, 3.0, 0.1, 50.0));
}
