//! Python bindings for toylibrary.
//!
//! Builds the `_daq_toylibrary_py` extension module:
//!
//! - top level: `ValueWrapperInt(value)` with `GetValue()`, `IntPrinter(wrapper)` with `Show()`
//! - `wind`: `WindUp(n)`, `WindDown(n)`
//! - `play`: `PlayInts(numbers, new_line=False)`
//!
//! ```python
//! import _daq_toylibrary_py as toylibrary
//!
//! toylibrary.IntPrinter(toylibrary.ValueWrapperInt(1)).Show()
//! toylibrary.wind.WindUp(1)
//! toylibrary.play.PlayInts([1, 2, 0])
//! toylibrary.play.PlayInts([1, 2, 0], True)
//! ```
//!
//! Submodules are attributes of the extension module, not importable packages, so
//! `from _daq_toylibrary_py.play import PlayInts` does not work.
//!
//! ```text
//! cargo test --no-default-features
//! ```

use pyo3::prelude::*;
use toylibrary::{play, IntPrinter, ValueWrapper};

/// `ValueWrapper<i32>` as seen from Python
#[pyclass(name = "ValueWrapperInt", frozen)]
#[derive(Clone)]
pub struct PyValueWrapperInt {
    inner: ValueWrapper<i32>,
}

#[pymethods]
impl PyValueWrapperInt {
    #[new]
    fn new(value: i32) -> Self {
        Self {
            inner: ValueWrapper::new(value),
        }
    }

    #[pyo3(name = "GetValue")]
    fn get_value(&self) -> i32 {
        self.inner.get_value()
    }
}

/// `IntPrinter` as seen from Python
#[pyclass(name = "IntPrinter", frozen)]
pub struct PyIntPrinter {
    inner: IntPrinter,
}

#[pymethods]
impl PyIntPrinter {
    #[new]
    fn new(wrapper: PyRef<'_, PyValueWrapperInt>) -> Self {
        Self {
            inner: IntPrinter::new(&wrapper.inner),
        }
    }

    #[pyo3(name = "Show")]
    fn show(&self) -> PyResult<()> {
        self.inner.show_to(&mut std::io::stdout())?;
        Ok(())
    }
}

#[pyfunction]
#[pyo3(name = "WindUp")]
fn wind_up(number: i32) -> i32 {
    play::wind_up(number)
}

#[pyfunction]
#[pyo3(name = "WindDown")]
fn wind_down(number: i32) -> i32 {
    play::wind_down(number)
}

#[pyfunction]
#[pyo3(name = "PlayInts", signature = (numbers, new_line = false))]
fn play_ints(numbers: Vec<i32>, new_line: bool) -> PyResult<()> {
    play::play_ints(&numbers, new_line, &mut std::io::stdout())?;
    Ok(())
}

/// Python module wrapper for the toylibrary crate
#[pymodule]
#[pyo3(name = "_daq_toylibrary_py")]
fn toylibrary_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__doc__", "Python module wrapper for the toylibrary crate")?;

    m.add_class::<PyValueWrapperInt>()?;
    m.add_class::<PyIntPrinter>()?;

    let wind = PyModule::new(m.py(), "wind")?;
    wind.add_function(wrap_pyfunction!(wind_up, &wind)?)?;
    wind.add_function(wrap_pyfunction!(wind_down, &wind)?)?;
    m.add_submodule(&wind)?;

    let play_module = PyModule::new(m.py(), "play")?;
    play_module.add_function(wrap_pyfunction!(play_ints, &play_module)?)?;
    m.add_submodule(&play_module)?;

    Ok(())
}
