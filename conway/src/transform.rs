// transform.rs - Axis swaps between the row-major text layout and the [x][y] board layout
//
// `flip(transpose(rows))` turns a top-down row matrix into board columns,
// `transpose(flip(columns))` undoes it. Inputs must be rectangular.

/// Swaps the two axes: `out[j][i] == grid[i][j]`.
pub fn transpose<T: Clone>(grid: &[Vec<T>]) -> Vec<Vec<T>> {
    let inner = grid.first().map_or(0, Vec::len);
    (0..inner)
        .map(|j| grid.iter().map(|line| line[j].clone()).collect())
        .collect()
}

/// Reverses the second axis: `out[i][n - 1 - j] == grid[i][j]`.
pub fn flip<T: Clone>(grid: &[Vec<T>]) -> Vec<Vec<T>> {
    grid.iter()
        .map(|line| line.iter().rev().cloned().collect())
        .collect()
}
