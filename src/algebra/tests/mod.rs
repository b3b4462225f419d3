mod banded;
